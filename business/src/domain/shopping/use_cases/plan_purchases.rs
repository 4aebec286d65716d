use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::MultiDayPurchasePlan;

pub struct PlanPurchasesParams {
    pub event_id: Uuid,
    pub today: NaiveDate,
}

#[async_trait]
pub trait PlanPurchasesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: PlanPurchasesParams,
    ) -> Result<MultiDayPurchasePlan, ShoppingError>;
}
