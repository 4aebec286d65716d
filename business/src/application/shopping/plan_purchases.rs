use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::meal::resolve::MealResolver;
use crate::application::shopping::context::{load_meals, load_portions};
use crate::domain::errors::RepositoryError;
use crate::domain::event::repository::EventRepository;
use crate::domain::logger::Logger;
use crate::domain::meal::model::Meal;
use crate::domain::meal::repository::MealRepository;
use crate::domain::participant::repository::ParticipantRepository;
use crate::domain::shopping::accumulator::{DemandAccumulator, accumulate_meals};
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::{DemandLine, MultiDayPurchasePlan};
use crate::domain::shopping::scheduler::schedule_purchases;
use crate::domain::shopping::settings::PlannerSettings;
use crate::domain::shopping::use_cases::plan_purchases::{
    PlanPurchasesParams, PlanPurchasesUseCase,
};

pub struct PlanPurchasesUseCaseImpl {
    pub events: Arc<dyn EventRepository>,
    pub meals: Arc<dyn MealRepository>,
    pub participants: Arc<dyn ParticipantRepository>,
    pub resolver: Arc<MealResolver>,
    pub settings: PlannerSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlanPurchasesUseCase for PlanPurchasesUseCaseImpl {
    async fn execute(
        &self,
        params: PlanPurchasesParams,
    ) -> Result<MultiDayPurchasePlan, ShoppingError> {
        self.logger.info(&format!(
            "Planning purchase trips for event: {}",
            params.event_id
        ));
        let logger = self.logger.as_ref();

        let event = self
            .events
            .get_by_id(params.event_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingError::EventNotFound,
                other => ShoppingError::Repository(other),
            })?;

        let meals = load_meals(self.meals.as_ref(), &self.resolver, event.id, logger).await?;
        let portions = load_portions(self.participants.as_ref(), &meals, params.today, logger).await?;

        let mut meals_by_day: BTreeMap<NaiveDate, Vec<&Meal>> = BTreeMap::new();
        for meal in &meals {
            meals_by_day.entry(meal.day).or_default().push(meal);
        }

        let mut demand_by_day: BTreeMap<NaiveDate, Vec<DemandLine>> = BTreeMap::new();
        for (day, day_meals) in meals_by_day {
            let mut accumulator = DemandAccumulator::new(logger);
            accumulate_meals(
                &mut accumulator,
                day_meals,
                &portions,
                None,
                self.settings.include_guests_in_totals,
                logger,
            );
            let lines: Vec<DemandLine> = accumulator
                .into_lines()
                .into_iter()
                .filter(|line| line.amount > 0.0)
                .collect();
            if !lines.is_empty() {
                demand_by_day.insert(day, lines);
            }
        }

        let report = schedule_purchases(&event, &demand_by_day);

        if report.cap_reached {
            self.logger.error(&format!(
                "Purchase scheduling for event {} stopped after {} iterations; {} lines bought on the day they are needed",
                event.id,
                report.iterations,
                report.forced.len()
            ));
            for (day, line) in &report.forced {
                self.logger
                    .debug(&format!("Forced purchase of '{}' on {}", line.name(), day));
            }
        }

        self.logger.info(&format!(
            "Planned {} purchase trips for {} days of demand",
            report.plan.trip_count(),
            demand_by_day.len()
        ));

        Ok(report.plan)
    }
}
