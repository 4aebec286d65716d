use serde::Deserialize;
use uuid::Uuid;

use business::domain::ingredient::model::{Ingredient, UnitConversion};
use business::domain::ingredient::value_objects::Unit;

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionEntity {
    pub from: String,
    pub factor: f64,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientEntity {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub shelf_life_days: Option<u32>,
    #[serde(default)]
    pub conversions: Vec<ConversionEntity>,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name,
            category: self.category,
            conversions: self
                .conversions
                .into_iter()
                .map(|c| UnitConversion {
                    from: Unit::from(c.from.as_str()),
                    factor: c.factor,
                    to: Unit::from(c.to.as_str()),
                })
                .collect(),
            shelf_life_days: self.shelf_life_days,
        }
    }
}
