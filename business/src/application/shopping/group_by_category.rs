use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping::category::{CategoryGroup, group_by_category};
use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::settings::PlannerSettings;
use crate::domain::shopping::use_cases::aggregate_demand::{
    AggregateDemandParams, AggregateDemandUseCase,
};
use crate::domain::shopping::use_cases::group_by_category::{
    GroupShoppingListParams, GroupShoppingListUseCase,
};

pub struct GroupShoppingListUseCaseImpl {
    pub aggregator: Arc<dyn AggregateDemandUseCase>,
    pub settings: PlannerSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GroupShoppingListUseCase for GroupShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: GroupShoppingListParams,
    ) -> Result<Vec<CategoryGroup>, ShoppingError> {
        let lines = self
            .aggregator
            .execute(AggregateDemandParams {
                event_id: params.event_id,
                today: params.today,
                multiplier_override: None,
            })
            .await?;

        let groups = group_by_category(lines, &self.settings);
        self.logger.debug(&format!(
            "Grouped shopping list of event {} into {} sections",
            params.event_id,
            groups.len()
        ));
        Ok(groups)
    }
}
