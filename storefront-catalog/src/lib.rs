pub mod product;
pub mod capability;
pub mod variants;

pub use product::{Product, ProductError, ProductInfo, ProductKind};
pub use capability::{Deliverable, Delivery, Refund, Refundable};
pub use variants::{Book, Laptop, Phone};
