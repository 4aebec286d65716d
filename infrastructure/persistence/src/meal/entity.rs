use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::ingredient::value_objects::Unit;
use business::domain::meal::model::{Meal, Recipe, RecipeIngredient, RecipeUse};
use business::domain::shared::value_objects::Resolution;

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeIngredientEntity {
    pub ingredient_id: Uuid,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientEntity>,
}

impl RecipeEntity {
    /// Ingredient lines come back as references; the planner resolves them.
    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|line| RecipeIngredient {
                    ingredient: Resolution::Unresolved(line.ingredient_id),
                    amount: line.amount,
                    unit: Unit::from(line.unit.as_str()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeUseEntity {
    pub recipe_id: Uuid,
    #[serde(default)]
    pub eaters: Vec<Uuid>,
    #[serde(default)]
    pub guest_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealEntity {
    pub id: Uuid,
    pub day: NaiveDate,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub recipes: Vec<RecipeUseEntity>,
}

impl MealEntity {
    pub fn into_domain(self) -> Meal {
        Meal {
            id: self.id,
            day: self.day,
            label: self.label,
            recipes: self
                .recipes
                .into_iter()
                .map(|recipe_use| RecipeUse {
                    recipe: Resolution::Unresolved(recipe_use.recipe_id),
                    eaters: recipe_use.eaters.into_iter().collect(),
                    guest_count: recipe_use.guest_count,
                })
                .collect(),
        }
    }
}
