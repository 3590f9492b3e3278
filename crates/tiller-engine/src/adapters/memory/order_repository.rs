//! In-memory implementation of OrderRepository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use tiller::domain::{DomainError, Order};
use tiller::ports::OrderRepository;

/// In-memory Order repository
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn get(&self, id: Uuid) -> Result<Order, DomainError> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        Ok(orders.get(&id).cloned())
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Order>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| DomainError::Repository("Failed to acquire read lock".to_string()))?;
        Ok(orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn save(&self, order: &Order) -> Result<Order, DomainError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| DomainError::Repository("Failed to acquire write lock".to_string()))?;
        orders.insert(order.id, order.clone());
        Ok(order.clone())
    }
}
