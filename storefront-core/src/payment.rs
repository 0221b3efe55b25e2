use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Selector for the payment strategy used to settle an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::CreditCard, Self::Paypal, Self::Cash];

    /// Strategy implementing this method
    pub fn strategy(self) -> Arc<dyn PaymentStrategy> {
        match self {
            Self::CreditCard => Arc::new(CreditCardPayment),
            Self::Paypal => Arc::new(PaypalPayment),
            Self::Cash => Arc::new(CashPayment),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CreditCard => "Credit Card",
            Self::Paypal => "PayPal",
            Self::Cash => "Cash",
        };
        f.write_str(label)
    }
}

/// Confirmation produced by a payment strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: f64,
    pub message: String,
}

/// Stateless payment strategy. Paying never fails.
pub trait PaymentStrategy: Send + Sync {
    fn method(&self) -> PaymentMethod;

    /// Settle `amount` and return the confirmation
    fn pay(&self, amount: f64) -> PaymentReceipt;
}

fn receipt(method: PaymentMethod, amount: f64, message: String) -> PaymentReceipt {
    tracing::info!(%method, amount, "{}", message);
    PaymentReceipt {
        method,
        amount,
        message,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn pay(&self, amount: f64) -> PaymentReceipt {
        receipt(self.method(), amount, format!("Paid {} using Credit Card", amount))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaypalPayment;

impl PaymentStrategy for PaypalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    fn pay(&self, amount: f64) -> PaymentReceipt {
        receipt(self.method(), amount, format!("Paid {} using PayPal", amount))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Cash
    }

    fn pay(&self, amount: f64) -> PaymentReceipt {
        receipt(self.method(), amount, format!("Paid {} in cash", amount))
    }
}
