use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::GroupDemand;

pub struct AllocateCookingGroupsParams {
    pub event_id: Uuid,
    pub day: NaiveDate,
    pub today: NaiveDate,
}

#[async_trait]
pub trait AllocateCookingGroupsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AllocateCookingGroupsParams,
    ) -> Result<Vec<GroupDemand>, ShoppingError>;
}
