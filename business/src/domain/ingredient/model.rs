use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Unit;

/// Ingredient-specific conversion, e.g. "1 cup = 240 g".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    pub from: Unit,
    pub factor: f64,
    pub to: Unit,
}

/// Catalog entry owned by the data layer; read-only to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub conversions: Vec<UnitConversion>,
    /// Days the ingredient stays usable after purchase. `None` never spoils.
    #[serde(default)]
    pub shelf_life_days: Option<u32>,
}

impl Ingredient {
    pub fn conversion_for(&self, unit: &Unit) -> Option<&UnitConversion> {
        self.conversions.iter().find(|c| &c.from == unit)
    }

    /// Case-insensitive name comparison used to bind free-text list items.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}
