use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::meal::resolve::MealResolver;
use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::meal::model::{Meal, all_eaters};
use crate::domain::meal::repository::MealRepository;
use crate::domain::participant::portion::PortionTable;
use crate::domain::participant::repository::ParticipantRepository;
use crate::domain::shopping::accumulator::bind_to_catalog;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::{DemandItem, DemandLine};
use crate::domain::shopping::repository::ShoppingListRepository;

/// Meals of the event with every reference the data layer could resolve.
pub async fn load_meals(
    repository: &dyn MealRepository,
    resolver: &MealResolver,
    event_id: Uuid,
    logger: &dyn Logger,
) -> Result<Vec<Meal>, ShoppingError> {
    let meals = repository.get_by_event(event_id).await.map_err(|e| {
        logger.error(&format!("Failed to fetch meals of event {}: {}", event_id, e));
        ShoppingError::MealsUnavailable
    })?;
    Ok(resolver.resolve(meals).await)
}

/// Multipliers of everyone eating at least one of `meals`, fetched in one
/// batch. A failed fetch degrades to an empty table (every eater counts 1.0).
pub async fn load_portions(
    repository: &dyn ParticipantRepository,
    meals: &[Meal],
    today: NaiveDate,
    logger: &dyn Logger,
) -> Result<PortionTable, ShoppingError> {
    let eaters: Vec<Uuid> = all_eaters(meals).into_iter().collect();
    if eaters.is_empty() {
        return Ok(PortionTable::default());
    }

    match repository.get_by_ids(&eaters).await {
        Ok(participants) => {
            let table = PortionTable::build(&participants, today)?;
            logger.debug(&format!(
                "Loaded portion multipliers for {} of {} eaters",
                table.len(),
                eaters.len()
            ));
            Ok(table)
        }
        Err(e) => {
            logger.warn(&format!(
                "Could not fetch participants, using default portions: {}",
                e
            ));
            Ok(PortionTable::default())
        }
    }
}

/// The saved shopping list, with free-text items bound to catalog
/// ingredients of the same name where possible.
pub async fn load_saved_list(
    shopping_list: &dyn ShoppingListRepository,
    ingredients: &dyn IngredientRepository,
    event_id: Uuid,
    logger: &dyn Logger,
) -> Result<Vec<DemandLine>, ShoppingError> {
    let saved = match shopping_list.get_by_event(event_id).await {
        Ok(saved) => saved,
        Err(RepositoryError::NotFound) => Vec::new(),
        Err(e) => return Err(ShoppingError::Repository(e)),
    };

    if !saved
        .iter()
        .any(|line| matches!(line.item, DemandItem::FreeText(_)))
    {
        return Ok(saved);
    }

    match ingredients.get_all().await {
        Ok(catalog) => Ok(saved
            .into_iter()
            .map(|line| bind_to_catalog(line, &catalog))
            .collect()),
        Err(e) => {
            logger.warn(&format!(
                "Could not load ingredient catalog, keeping free-text items: {}",
                e
            ));
            Ok(saved)
        }
    }
}
