use std::sync::Arc;

use async_trait::async_trait;

use crate::application::meal::resolve::MealResolver;
use crate::application::shopping::context::{load_meals, load_portions, load_saved_list};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::meal::repository::MealRepository;
use crate::domain::participant::repository::ParticipantRepository;
use crate::domain::shopping::accumulator::{DemandAccumulator, accumulate_meals, is_manual};
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::DemandLine;
use crate::domain::shopping::repository::ShoppingListRepository;
use crate::domain::shopping::settings::PlannerSettings;
use crate::domain::shopping::use_cases::aggregate_demand::{
    AggregateDemandParams, AggregateDemandUseCase,
};

pub struct AggregateDemandUseCaseImpl {
    pub meals: Arc<dyn MealRepository>,
    pub participants: Arc<dyn ParticipantRepository>,
    pub shopping_list: Arc<dyn ShoppingListRepository>,
    pub ingredients: Arc<dyn IngredientRepository>,
    pub resolver: Arc<MealResolver>,
    pub settings: PlannerSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AggregateDemandUseCase for AggregateDemandUseCaseImpl {
    async fn execute(
        &self,
        params: AggregateDemandParams,
    ) -> Result<Vec<DemandLine>, ShoppingError> {
        self.logger.info(&format!(
            "Aggregating shopping demand for event: {}",
            params.event_id
        ));
        let logger = self.logger.as_ref();

        let meals = load_meals(self.meals.as_ref(), &self.resolver, params.event_id, logger).await?;
        let saved = load_saved_list(
            self.shopping_list.as_ref(),
            self.ingredients.as_ref(),
            params.event_id,
            logger,
        )
        .await?;
        let portions = load_portions(self.participants.as_ref(), &meals, params.today, logger).await?;

        let manual = saved.iter().filter(|line| is_manual(line)).count();
        let mut accumulator = DemandAccumulator::new(logger);
        accumulator.seed(saved);
        accumulate_meals(
            &mut accumulator,
            &meals,
            &portions,
            params.multiplier_override,
            self.settings.include_guests_in_totals,
            logger,
        );
        let lines = accumulator.into_lines();

        self.logger.info(&format!(
            "Aggregated {} demand lines from {} meals ({} entered by user)",
            lines.len(),
            meals.len(),
            manual
        ));

        Ok(lines)
    }
}
