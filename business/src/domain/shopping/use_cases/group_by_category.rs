use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::shopping::category::CategoryGroup;
use crate::domain::shopping::errors::ShoppingError;

pub struct GroupShoppingListParams {
    pub event_id: Uuid,
    pub today: NaiveDate,
}

#[async_trait]
pub trait GroupShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GroupShoppingListParams,
    ) -> Result<Vec<CategoryGroup>, ShoppingError>;
}
