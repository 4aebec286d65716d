use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::meal::model::{Meal, Recipe};
use crate::domain::meal::repository::RecipeRepository;
use crate::domain::shared::value_objects::Resolution;

/// Fills in recipe and ingredient references the meal source left unresolved.
///
/// Lookups for distinct ids run concurrently; a failed lookup is logged and
/// the reference stays `Unresolved` so the aggregation skips that line.
pub struct MealResolver {
    pub recipes: Arc<dyn RecipeRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

impl MealResolver {
    pub async fn resolve(&self, mut meals: Vec<Meal>) -> Vec<Meal> {
        let missing_recipes: BTreeSet<Uuid> = meals
            .iter()
            .flat_map(|meal| meal.recipes.iter())
            .filter(|recipe_use| !recipe_use.recipe.is_resolved())
            .map(|recipe_use| recipe_use.recipe_id())
            .collect();

        if !missing_recipes.is_empty() {
            let recipes = self.fetch_recipes(missing_recipes).await;
            for recipe_use in meals.iter_mut().flat_map(|meal| meal.recipes.iter_mut()) {
                if let Resolution::Unresolved(id) = recipe_use.recipe {
                    if let Some(recipe) = recipes.get(&id) {
                        recipe_use.recipe = Resolution::Resolved(recipe.clone());
                    }
                }
            }
        }

        let missing_ingredients: BTreeSet<Uuid> = resolved_recipes(&meals)
            .flat_map(|recipe| recipe.ingredients.iter())
            .filter(|line| !line.ingredient.is_resolved())
            .map(|line| line.ingredient_id())
            .collect();

        if !missing_ingredients.is_empty() {
            let ingredients = self.fetch_ingredients(missing_ingredients).await;
            for recipe_use in meals.iter_mut().flat_map(|meal| meal.recipes.iter_mut()) {
                let Resolution::Resolved(recipe) = &mut recipe_use.recipe else {
                    continue;
                };
                for line in recipe.ingredients.iter_mut() {
                    if let Resolution::Unresolved(id) = line.ingredient {
                        if let Some(ingredient) = ingredients.get(&id) {
                            line.ingredient = Resolution::Resolved(ingredient.clone());
                        }
                    }
                }
            }
        }

        meals
    }

    async fn fetch_recipes(&self, ids: BTreeSet<Uuid>) -> HashMap<Uuid, Recipe> {
        self.logger
            .debug(&format!("Resolving {} recipe references", ids.len()));

        let lookups = ids.into_iter().map(|id| {
            let repository = Arc::clone(&self.recipes);
            async move { (id, repository.get_by_id(id).await) }
        });

        let mut recipes = HashMap::new();
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(recipe) => {
                    recipes.insert(id, recipe);
                }
                Err(e) => self
                    .logger
                    .warn(&format!("Could not resolve recipe {}: {}", id, e)),
            }
        }
        recipes
    }

    async fn fetch_ingredients(&self, ids: BTreeSet<Uuid>) -> HashMap<Uuid, Ingredient> {
        self.logger
            .debug(&format!("Resolving {} ingredient references", ids.len()));

        let lookups = ids.into_iter().map(|id| {
            let repository = Arc::clone(&self.ingredients);
            async move { (id, repository.get_by_id(id).await) }
        });

        let mut ingredients = HashMap::new();
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(ingredient) => {
                    ingredients.insert(id, ingredient);
                }
                Err(e) => self
                    .logger
                    .warn(&format!("Could not resolve ingredient {}: {}", id, e)),
            }
        }
        ingredients
    }
}

fn resolved_recipes(meals: &[Meal]) -> impl Iterator<Item = &Recipe> {
    meals
        .iter()
        .flat_map(|meal| meal.recipes.iter())
        .filter_map(|recipe_use| recipe_use.recipe.resolved())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::value_objects::Unit;
    use crate::domain::meal::model::{RecipeIngredient, RecipeUse};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
        }
    }

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn onion(id: Uuid) -> Ingredient {
        Ingredient {
            id,
            name: "Onion".to_string(),
            category: "Vegetables".to_string(),
            conversions: vec![],
            shelf_life_days: Some(14),
        }
    }

    fn soup(id: Uuid, onion_id: Uuid) -> Recipe {
        Recipe {
            id,
            name: "Onion soup".to_string(),
            ingredients: vec![RecipeIngredient {
                ingredient: Resolution::Unresolved(onion_id),
                amount: 1.0,
                unit: Unit::Piece,
            }],
        }
    }

    fn meal_with(recipes: Vec<Resolution<Recipe>>) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            day: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            label: "Dinner".to_string(),
            recipes: recipes
                .into_iter()
                .map(|recipe| RecipeUse {
                    recipe,
                    eaters: Default::default(),
                    guest_count: 0,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn should_resolve_recipes_and_their_ingredients() {
        let recipe_id = Uuid::new_v4();
        let onion_id = Uuid::new_v4();

        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_get_by_id()
            .withf(move |id| *id == recipe_id)
            .times(1)
            .returning(move |id| Ok(soup(id, onion_id)));

        let mut ingredients = MockIngredientRepo::new();
        ingredients
            .expect_get_by_id()
            .withf(move |id| *id == onion_id)
            .times(1)
            .returning(|id| Ok(onion(id)));

        let resolver = MealResolver {
            recipes: Arc::new(recipes),
            ingredients: Arc::new(ingredients),
            logger: mock_logger(),
        };

        let meals = resolver
            .resolve(vec![
                meal_with(vec![Resolution::Unresolved(recipe_id)]),
                meal_with(vec![Resolution::Unresolved(recipe_id)]),
            ])
            .await;

        for meal in &meals {
            let recipe = meal.recipes[0].recipe.resolved().unwrap();
            assert_eq!(recipe.name, "Onion soup");
            let ingredient = recipe.ingredients[0].ingredient.resolved().unwrap();
            assert_eq!(ingredient.name, "Onion");
        }
    }

    #[tokio::test]
    async fn should_leave_reference_unresolved_when_lookup_fails() {
        let found = Uuid::new_v4();
        let missing = Uuid::new_v4();

        let mut recipes = MockRecipeRepo::new();
        recipes.expect_get_by_id().returning(move |id| {
            if id == found {
                Ok(Recipe {
                    id,
                    name: "Bread".to_string(),
                    ingredients: vec![],
                })
            } else {
                Err(RepositoryError::NotFound)
            }
        });
        let ingredients = MockIngredientRepo::new();

        let resolver = MealResolver {
            recipes: Arc::new(recipes),
            ingredients: Arc::new(ingredients),
            logger: mock_logger(),
        };

        let meals = resolver
            .resolve(vec![meal_with(vec![
                Resolution::Unresolved(found),
                Resolution::Unresolved(missing),
            ])])
            .await;

        assert!(meals[0].recipes[0].recipe.is_resolved());
        assert_eq!(
            meals[0].recipes[1].recipe,
            Resolution::Unresolved(missing)
        );
    }

    #[tokio::test]
    async fn should_not_touch_repositories_when_everything_is_resolved() {
        let mut recipes = MockRecipeRepo::new();
        recipes.expect_get_by_id().never();
        let mut ingredients = MockIngredientRepo::new();
        ingredients.expect_get_by_id().never();

        let resolver = MealResolver {
            recipes: Arc::new(recipes),
            ingredients: Arc::new(ingredients),
            logger: mock_logger(),
        };
        let resolved = Recipe {
            id: Uuid::new_v4(),
            name: "Salad".to_string(),
            ingredients: vec![RecipeIngredient {
                ingredient: Resolution::Resolved(onion(Uuid::new_v4())),
                amount: 0.5,
                unit: Unit::Piece,
            }],
        };

        let meals = resolver
            .resolve(vec![meal_with(vec![Resolution::Resolved(resolved.clone())])])
            .await;

        assert_eq!(meals[0].recipes[0].recipe, Resolution::Resolved(resolved));
    }
}
