//! Order Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Order};

/// Repository interface for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch an order; a missing id is the declared `NotFound` error
    async fn get(&self, id: Uuid) -> Result<Order, DomainError>;

    /// Look up an order where absence is an expected answer
    async fn find(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// Find all orders for a customer
    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>, DomainError>;

    /// Save an order (insert or update)
    async fn save(&self, order: &Order) -> Result<Order, DomainError>;
}
