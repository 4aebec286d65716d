use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use uuid::Uuid;

use crate::application::meal::resolve::MealResolver;
use crate::application::shopping::context::load_meals;
use crate::domain::logger::Logger;
use crate::domain::meal::model::all_eaters;
use crate::domain::meal::repository::MealRepository;
use crate::domain::participant::model::{Participant, ParticipantWindow};
use crate::domain::participant::portion::{DEFAULT_MULTIPLIER, PortionTable};
use crate::domain::participant::repository::ParticipantRepository;
use crate::domain::shared::value_objects::Resolution;
use crate::domain::shopping::accumulator::DemandAccumulator;
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::{GroupDemand, GroupKind};
use crate::domain::shopping::settings::{GUEST_GROUP, OTHER_GROUP};
use crate::domain::shopping::use_cases::allocate_cooking_groups::{
    AllocateCookingGroupsParams, AllocateCookingGroupsUseCase,
};

/// Output bucket. Guests get their own variant so a cooking group that
/// happens to share the guests' name is never merged with them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    Group(String),
    Guests,
}

impl Bucket {
    fn name(&self) -> &str {
        match self {
            Bucket::Group(name) => name,
            Bucket::Guests => GUEST_GROUP,
        }
    }

    fn kind(&self) -> GroupKind {
        match self {
            Bucket::Group(_) => GroupKind::CookingGroup,
            Bucket::Guests => GroupKind::Guests,
        }
    }
}

struct BucketDemand<'a> {
    accumulator: DemandAccumulator<'a>,
    participants: BTreeSet<Uuid>,
    guests: u32,
}

pub struct AllocateCookingGroupsUseCaseImpl {
    pub meals: Arc<dyn MealRepository>,
    pub participants: Arc<dyn ParticipantRepository>,
    pub resolver: Arc<MealResolver>,
    pub logger: Arc<dyn Logger>,
}

impl AllocateCookingGroupsUseCaseImpl {
    /// Participants of the given eaters: taken from the windows when resolved
    /// there, otherwise looked up one by one concurrently.
    async fn participants_for(
        &self,
        eaters: &BTreeSet<Uuid>,
        windows: &HashMap<Uuid, &ParticipantWindow>,
    ) -> Vec<Participant> {
        let mut participants = Vec::with_capacity(eaters.len());
        let mut missing = Vec::new();

        for id in eaters {
            match windows.get(id).map(|window| &window.participant) {
                Some(Resolution::Resolved(participant)) => participants.push(participant.clone()),
                _ => missing.push(*id),
            }
        }

        let lookups = missing.into_iter().map(|id| {
            let repository = Arc::clone(&self.participants);
            async move { (id, repository.get_by_id(id).await) }
        });
        for (id, result) in join_all(lookups).await {
            match result {
                Ok(participant) => participants.push(participant),
                Err(e) => self.logger.warn(&format!(
                    "Could not resolve participant {}, using default portion: {}",
                    id, e
                )),
            }
        }

        participants
    }
}

#[async_trait]
impl AllocateCookingGroupsUseCase for AllocateCookingGroupsUseCaseImpl {
    async fn execute(
        &self,
        params: AllocateCookingGroupsParams,
    ) -> Result<Vec<GroupDemand>, ShoppingError> {
        self.logger.info(&format!(
            "Allocating demand per cooking group for event {} on {}",
            params.event_id, params.day
        ));
        let logger = self.logger.as_ref();

        let meals: Vec<_> = load_meals(self.meals.as_ref(), &self.resolver, params.event_id, logger)
            .await?
            .into_iter()
            .filter(|meal| meal.day == params.day)
            .collect();

        let all_windows = self
            .participants
            .get_windows_by_event(params.event_id)
            .await
            .map_err(|e| {
                self.logger.error(&format!(
                    "Failed to fetch participants of event {}: {}",
                    params.event_id, e
                ));
                ShoppingError::ParticipantsUnavailable
            })?;

        let mut windows: HashMap<Uuid, &ParticipantWindow> = HashMap::new();
        for window in all_windows.iter().filter(|w| w.covers(params.day)) {
            windows.entry(window.participant_id).or_insert(window);
        }

        let eaters = all_eaters(&meals);
        let participants = self.participants_for(&eaters, &windows).await;
        let portions = PortionTable::build(&participants, params.today)?;

        let group_of = |id: &Uuid| -> String {
            windows
                .get(id)
                .map(|window| window.cooking_group.trim())
                .filter(|group| !group.is_empty())
                .unwrap_or(OTHER_GROUP)
                .to_string()
        };

        let mut buckets: BTreeMap<Bucket, BucketDemand> = BTreeMap::new();
        for meal in &meals {
            for recipe_use in &meal.recipes {
                let Resolution::Resolved(recipe) = &recipe_use.recipe else {
                    logger.warn(&format!(
                        "Skipping unresolved recipe {} on {}",
                        recipe_use.recipe_id(),
                        meal.day
                    ));
                    continue;
                };

                let mut by_group: BTreeMap<String, Vec<Uuid>> = BTreeMap::new();
                for eater in &recipe_use.eaters {
                    by_group.entry(group_of(eater)).or_default().push(*eater);
                }

                for (group, members) in by_group {
                    let bucket = buckets
                        .entry(Bucket::Group(group))
                        .or_insert_with(|| BucketDemand {
                            accumulator: DemandAccumulator::new(logger),
                            participants: BTreeSet::new(),
                            guests: 0,
                        });
                    let multiplier = portions.sum_for(&members, logger);
                    bucket.accumulator.add_recipe(recipe, multiplier);
                    bucket.participants.extend(members);
                }

                if recipe_use.guest_count > 0 {
                    let bucket = buckets.entry(Bucket::Guests).or_insert_with(|| BucketDemand {
                        accumulator: DemandAccumulator::new(logger),
                        participants: BTreeSet::new(),
                        guests: 0,
                    });
                    let multiplier = f64::from(recipe_use.guest_count) * DEFAULT_MULTIPLIER;
                    bucket.accumulator.add_recipe(recipe, multiplier);
                    bucket.guests = bucket.guests.max(recipe_use.guest_count);
                }
            }
        }

        let mut groups: Vec<GroupDemand> = buckets
            .into_iter()
            .map(|(bucket, demand)| GroupDemand {
                group: bucket.name().to_string(),
                kind: bucket.kind(),
                participant_count: demand.participants.len(),
                guest_count: demand.guests,
                lines: demand.accumulator.into_lines(),
            })
            .collect();
        groups.sort_by(|a, b| a.group.cmp(&b.group));

        self.logger.info(&format!(
            "Allocated demand to {} cooking groups on {}",
            groups.len(),
            params.day
        ));

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::Ingredient;
    use crate::domain::ingredient::repository::IngredientRepository;
    use crate::domain::ingredient::value_objects::Unit;
    use crate::domain::meal::model::{Meal, Recipe, RecipeIngredient, RecipeUse};
    use crate::domain::meal::repository::RecipeRepository;
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub MealRepo {}

        #[async_trait]
        impl MealRepository for MealRepo {
            async fn get_by_event(&self, event_id: Uuid) -> Result<Vec<Meal>, RepositoryError>;
        }
    }

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
        pub ParticipantRepo {}

        #[async_trait]
        impl ParticipantRepository for ParticipantRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Participant, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Participant>, RepositoryError>;
            async fn get_windows_by_event(
                &self,
                event_id: Uuid,
            ) -> Result<Vec<ParticipantWindow>, RepositoryError>;
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

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn adult(name: &str) -> Participant {
        Participant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            birthdate: None,
            group: String::new(),
        }
    }

    fn born(name: &str, year: i32, month: u32, d: u32) -> Participant {
        Participant {
            birthdate: NaiveDate::from_ymd_opt(year, month, d),
            ..adult(name)
        }
    }

    fn window(participant: &Participant, group: &str) -> ParticipantWindow {
        ParticipantWindow {
            participant_id: participant.id,
            participant: Resolution::Resolved(participant.clone()),
            from: day(1),
            to: day(6),
            cooking_group: group.to_string(),
        }
    }

    fn potatoes() -> Ingredient {
        Ingredient {
            id: Uuid::new_v4(),
            name: "Potatoes".to_string(),
            category: "Vegetables".to_string(),
            conversions: vec![],
            shelf_life_days: Some(20),
        }
    }

    fn recipe(ingredient: &Ingredient, amount: f64) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            name: "Mash".to_string(),
            ingredients: vec![RecipeIngredient {
                ingredient: Resolution::Resolved(ingredient.clone()),
                amount,
                unit: Unit::Gram,
            }],
        }
    }

    fn recipe_use(recipe: Recipe, eaters: &[&Participant], guests: u32) -> RecipeUse {
        RecipeUse {
            recipe: Resolution::Resolved(recipe),
            eaters: eaters.iter().map(|p| p.id).collect(),
            guest_count: guests,
        }
    }

    fn use_case(
        meals: Vec<Meal>,
        windows: Vec<ParticipantWindow>,
        lookups: Vec<Participant>,
    ) -> AllocateCookingGroupsUseCaseImpl {
        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_get_by_event()
            .returning(move |_| Ok(meals.clone()));

        let mut participant_repo = MockParticipantRepo::new();
        participant_repo
            .expect_get_windows_by_event()
            .returning(move |_| Ok(windows.clone()));
        participant_repo.expect_get_by_id().returning(move |id| {
            lookups
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        });

        let logger = mock_logger();
        AllocateCookingGroupsUseCaseImpl {
            meals: Arc::new(meal_repo),
            participants: Arc::new(participant_repo),
            resolver: Arc::new(MealResolver {
                recipes: Arc::new(MockRecipeRepo::new()),
                ingredients: Arc::new(MockIngredientRepo::new()),
                logger: logger.clone(),
            }),
            logger,
        }
    }

    fn params(d: u32) -> AllocateCookingGroupsParams {
        AllocateCookingGroupsParams {
            event_id: Uuid::new_v4(),
            day: day(d),
            today: day(1),
        }
    }

    #[tokio::test]
    async fn should_split_demand_by_cooking_group_and_guests() {
        let anna = adult("Anna");
        let ben = adult("Ben");
        let cleo = adult("Cleo");
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(2),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&anna, &ben, &cleo], 2)],
        }];
        let windows = vec![
            window(&anna, "Wölfe"),
            window(&ben, "Wölfe"),
            window(&cleo, "Biber"),
        ];

        let groups = use_case(meals, windows, vec![])
            .execute(params(2))
            .await
            .unwrap();

        let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, vec!["Biber", "Gäste", "Wölfe"]);
        assert_eq!(groups[0].lines[0].amount, 100.0);
        assert_eq!(groups[0].participant_count, 1);
        assert_eq!(groups[1].lines[0].amount, 200.0);
        assert_eq!(groups[1].guest_count, 2);
        assert_eq!(groups[1].participant_count, 0);
        assert_eq!(groups[2].lines[0].amount, 200.0);
        assert_eq!(groups[2].participant_count, 2);
        assert_eq!(groups[0].kind, GroupKind::CookingGroup);
        assert_eq!(groups[1].kind, GroupKind::Guests);
    }

    #[tokio::test]
    async fn should_weight_each_group_by_its_members_ages() {
        let toddler = born("Mia", 2022, 3, 1);
        let parent = adult("Jonas");
        let teen = born("Lea", 2009, 1, 1);
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(2),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&toddler, &parent, &teen], 0)],
        }];
        let windows = vec![
            window(&toddler, "Biber"),
            window(&parent, "Biber"),
            window(&teen, "Pfadi"),
        ];

        let groups = use_case(meals, windows, vec![])
            .execute(params(2))
            .await
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "Biber");
        assert!((groups[0].lines[0].amount - 140.0).abs() < 1e-9);
        assert_eq!(groups[1].group, "Pfadi");
        assert!((groups[1].lines[0].amount - 120.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_fail_when_a_participant_is_not_born_yet() {
        let unborn = born("Noah", 2026, 1, 1);
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(2),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&unborn], 0)],
        }];

        let result = use_case(meals, vec![window(&unborn, "Biber")], vec![])
            .execute(params(2))
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingError::Participant(_)));
    }

    #[tokio::test]
    async fn should_keep_group_named_like_guests_apart_from_guests() {
        let anna = adult("Anna");
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(2),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&anna], 3)],
        }];

        let groups = use_case(meals, vec![window(&anna, GUEST_GROUP)], vec![])
            .execute(params(2))
            .await
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, GroupKind::CookingGroup);
        assert_eq!(groups[0].lines[0].amount, 100.0);
        assert_eq!(groups[1].kind, GroupKind::Guests);
        assert_eq!(groups[1].lines[0].amount, 300.0);
    }

    #[tokio::test]
    async fn should_route_unassigned_eaters_to_other_bucket() {
        let anna = adult("Anna");
        let drifter = adult("Drifter");
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(3),
            label: "Dinner".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 50.0), &[&anna, &drifter], 0)],
        }];

        let groups = use_case(meals, vec![window(&anna, "  ")], vec![drifter.clone()])
            .execute(params(3))
            .await
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group, OTHER_GROUP);
        assert_eq!(groups[0].participant_count, 2);
        assert_eq!(groups[0].lines[0].amount, 100.0);
    }

    #[tokio::test]
    async fn should_sum_identical_ingredients_within_a_group_over_the_day() {
        let anna = adult("Anna");
        let spuds = potatoes();
        let meal = |label: &str, amount: f64| Meal {
            id: Uuid::new_v4(),
            day: day(4),
            label: label.to_string(),
            recipes: vec![recipe_use(recipe(&spuds, amount), &[&anna], 0)],
        };
        let meals = vec![meal("Lunch", 120.0), meal("Dinner", 80.0)];

        let groups = use_case(meals, vec![window(&anna, "Füchse")], vec![])
            .execute(params(4))
            .await
            .unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines.len(), 1);
        assert_eq!(groups[0].lines[0].amount, 200.0);
    }

    #[tokio::test]
    async fn should_ignore_meals_of_other_days() {
        let anna = adult("Anna");
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(5),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&anna], 3)],
        }];

        let groups = use_case(meals, vec![window(&anna, "Biber")], vec![])
            .execute(params(2))
            .await
            .unwrap();

        assert!(groups.is_empty());
    }

    #[tokio::test]
    async fn should_ignore_windows_not_covering_the_day() {
        let anna = adult("Anna");
        let spuds = potatoes();
        let meals = vec![Meal {
            id: Uuid::new_v4(),
            day: day(2),
            label: "Lunch".to_string(),
            recipes: vec![recipe_use(recipe(&spuds, 100.0), &[&anna], 0)],
        }];
        let mut late = window(&anna, "Biber");
        late.from = day(3);

        let groups = use_case(meals, vec![late], vec![anna.clone()])
            .execute(params(2))
            .await
            .unwrap();

        assert_eq!(groups[0].group, OTHER_GROUP);
    }

    #[tokio::test]
    async fn should_fail_when_participant_windows_cannot_be_fetched() {
        let mut participant_repo = MockParticipantRepo::new();
        participant_repo
            .expect_get_windows_by_event()
            .returning(|_| Err(RepositoryError::Unavailable));
        let mut use_case = use_case(vec![], vec![], vec![]);
        use_case.participants = Arc::new(participant_repo);

        let result = use_case.execute(params(2)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingError::ParticipantsUnavailable
        ));
    }
}
