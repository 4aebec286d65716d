use serde::Deserialize;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::value_objects::Unit;
use business::domain::shared::value_objects::Resolution;
use business::domain::shopping::model::{DemandItem, DemandLine, Origin};

fn default_origin() -> String {
    Origin::EnteredByUser.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShoppingListEntryEntity {
    pub id: Uuid,
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub purchased: bool,
}

impl ShoppingListEntryEntity {
    /// `ingredient` is the catalog entry for `ingredient_id`, when it exists.
    pub fn into_domain(self, ingredient: Option<Ingredient>) -> Result<DemandLine, RepositoryError> {
        let item = match (self.ingredient_id, ingredient) {
            (Some(_), Some(ingredient)) => DemandItem::Catalog(Resolution::Resolved(ingredient)),
            (Some(id), None) => DemandItem::Catalog(Resolution::Unresolved(id)),
            (None, _) if self.name.trim().is_empty() => return Err(RepositoryError::Corrupted),
            (None, _) => DemandItem::FreeText(self.name),
        };

        let origin = self
            .origin
            .parse::<Origin>()
            .map_err(|_| RepositoryError::Corrupted)?;

        Ok(DemandLine {
            id: Some(self.id),
            item,
            amount: self.amount,
            unit: Unit::from(self.unit.as_str()),
            origin,
            note: self.note,
            purchased: self.purchased,
        })
    }
}
