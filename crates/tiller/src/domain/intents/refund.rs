//! Refund instruction
//!
//! The payload handed to a payment gateway. It carries everything the
//! gateway needs; executing it must not require reading the order back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Money;

/// A fully-specified refund request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundInstruction {
    pub order_id: Uuid,
    pub amount: Money,
    pub reason: String,
}
