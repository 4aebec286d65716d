use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::shopping::errors::ShoppingError;
use crate::domain::shopping::model::DemandLine;

pub struct AggregateDemandParams {
    pub event_id: Uuid,
    /// Reference date for participant ages.
    pub today: NaiveDate,
    /// Replaces the per-recipe portion count when set.
    pub multiplier_override: Option<f64>,
}

#[async_trait]
pub trait AggregateDemandUseCase: Send + Sync {
    async fn execute(&self, params: AggregateDemandParams)
    -> Result<Vec<DemandLine>, ShoppingError>;
}
