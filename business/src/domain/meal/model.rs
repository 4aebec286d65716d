use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::value_objects::Unit;
use crate::domain::shared::value_objects::Resolution;

/// One ingredient line of a recipe, amount per single portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient: Resolution<Ingredient>,
    pub amount: f64,
    pub unit: Unit,
}

impl RecipeIngredient {
    pub fn ingredient_id(&self) -> Uuid {
        match &self.ingredient {
            Resolution::Resolved(ingredient) => ingredient.id,
            Resolution::Unresolved(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
}

/// A recipe served at a meal, with the participants eating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeUse {
    pub recipe: Resolution<Recipe>,
    #[serde(default)]
    pub eaters: BTreeSet<Uuid>,
    /// Anonymous extra portions not attributable to a participant.
    #[serde(default)]
    pub guest_count: u32,
}

impl RecipeUse {
    pub fn recipe_id(&self) -> Uuid {
        match &self.recipe {
            Resolution::Resolved(recipe) => recipe.id,
            Resolution::Unresolved(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub day: NaiveDate,
    #[serde(default)]
    pub label: String,
    pub recipes: Vec<RecipeUse>,
}

/// Every participant eating at least one of `meals`.
pub fn all_eaters(meals: &[Meal]) -> BTreeSet<Uuid> {
    meals
        .iter()
        .flat_map(|meal| meal.recipes.iter())
        .flat_map(|recipe_use| recipe_use.eaters.iter().copied())
        .collect()
}
