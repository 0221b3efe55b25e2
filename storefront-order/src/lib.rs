pub mod models;
pub mod fulfillment;
pub mod orchestrator;

pub use models::{Order, OrderSummary};
pub use fulfillment::{RefundOutcome, RefundReport};
pub use orchestrator::PaymentOrchestrator;
