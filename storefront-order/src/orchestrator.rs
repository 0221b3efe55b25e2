use std::sync::Arc;
use storefront_core::{PaymentMethod, PaymentReceipt, PaymentStrategy};

use crate::models::Order;

/// Settles orders through a chosen payment strategy
pub struct PaymentOrchestrator {
    strategy: Arc<dyn PaymentStrategy>,
}

impl PaymentOrchestrator {
    pub fn new(strategy: Arc<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    /// Pay the order's total as it stands right now
    pub fn settle(&self, order: &Order) -> PaymentReceipt {
        self.strategy.pay(order.total())
    }
}

impl From<PaymentMethod> for PaymentOrchestrator {
    fn from(method: PaymentMethod) -> Self {
        Self::new(method.strategy())
    }
}
