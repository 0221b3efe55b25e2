use serde::{Deserialize, Serialize};

use crate::product::ProductError;

/// Record of a completed delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub product_id: String,
    pub description: String,
}

/// Record of a completed refund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub product_id: String,
    pub amount: f64,
    pub description: String,
}

/// Products that can be shipped to a customer
pub trait Deliverable {
    /// Ship the product. Never fails.
    fn deliver(&self) -> Delivery;
}

/// Products that take part in refunds.
///
/// Implementors may still refuse by policy with
/// [`ProductError::NonRefundable`].
pub trait Refundable {
    fn refund(&self) -> Result<Refund, ProductError>;
}
