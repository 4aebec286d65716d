use std::sync::Arc;

use logger::TracingLogger;
use persistence::event::repository::EventRepositorySnapshot;
use persistence::ingredient::repository::IngredientRepositorySnapshot;
use persistence::meal::repository::{MealRepositorySnapshot, RecipeRepositorySnapshot};
use persistence::participant::repository::ParticipantRepositorySnapshot;
use persistence::shopping_list::repository::ShoppingListRepositorySnapshot;
use persistence::store::SnapshotStore;

use business::application::meal::resolve::MealResolver;
use business::application::shopping::aggregate_demand::AggregateDemandUseCaseImpl;
use business::application::shopping::allocate_cooking_groups::AllocateCookingGroupsUseCaseImpl;
use business::application::shopping::group_by_category::GroupShoppingListUseCaseImpl;
use business::application::shopping::plan_purchases::PlanPurchasesUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::shopping::settings::PlannerSettings;
use business::domain::shopping::use_cases::aggregate_demand::AggregateDemandUseCase;
use business::domain::shopping::use_cases::allocate_cooking_groups::AllocateCookingGroupsUseCase;
use business::domain::shopping::use_cases::group_by_category::GroupShoppingListUseCase;
use business::domain::shopping::use_cases::plan_purchases::PlanPurchasesUseCase;

pub struct DependencyContainer {
    pub aggregate_demand: Arc<dyn AggregateDemandUseCase>,
    pub group_shopping_list: Arc<dyn GroupShoppingListUseCase>,
    pub allocate_cooking_groups: Arc<dyn AllocateCookingGroupsUseCase>,
    pub plan_purchases: Arc<dyn PlanPurchasesUseCase>,
}

impl DependencyContainer {
    pub fn new(store: Arc<SnapshotStore>, settings: PlannerSettings) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let event_repository = Arc::new(EventRepositorySnapshot::new(store.clone()));
        let meal_repository = Arc::new(MealRepositorySnapshot::new(store.clone()));
        let recipe_repository = Arc::new(RecipeRepositorySnapshot::new(store.clone()));
        let ingredient_repository = Arc::new(IngredientRepositorySnapshot::new(store.clone()));
        let participant_repository = Arc::new(ParticipantRepositorySnapshot::new(store.clone()));
        let shopping_list_repository = Arc::new(ShoppingListRepositorySnapshot::new(store));

        let resolver = Arc::new(MealResolver {
            recipes: recipe_repository,
            ingredients: ingredient_repository.clone(),
            logger: logger.clone(),
        });

        // Shopping use cases
        let aggregate_demand = Arc::new(AggregateDemandUseCaseImpl {
            meals: meal_repository.clone(),
            participants: participant_repository.clone(),
            shopping_list: shopping_list_repository,
            ingredients: ingredient_repository,
            resolver: resolver.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let group_shopping_list = Arc::new(GroupShoppingListUseCaseImpl {
            aggregator: aggregate_demand.clone(),
            settings: settings.clone(),
            logger: logger.clone(),
        });
        let allocate_cooking_groups = Arc::new(AllocateCookingGroupsUseCaseImpl {
            meals: meal_repository.clone(),
            participants: participant_repository.clone(),
            resolver: resolver.clone(),
            logger: logger.clone(),
        });
        let plan_purchases = Arc::new(PlanPurchasesUseCaseImpl {
            events: event_repository,
            meals: meal_repository,
            participants: participant_repository,
            resolver,
            settings,
            logger,
        });

        Self {
            aggregate_demand,
            group_shopping_list,
            allocate_cooking_groups,
            plan_purchases,
        }
    }
}
