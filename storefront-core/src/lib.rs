pub mod entity;
pub mod customer;
pub mod payment;

pub use entity::Entity;
pub use customer::Customer;
pub use payment::{
    CashPayment, CreditCardPayment, PaymentMethod, PaymentReceipt, PaymentStrategy, PaypalPayment,
};
