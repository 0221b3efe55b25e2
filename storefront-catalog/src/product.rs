use serde::{Deserialize, Serialize};
use std::fmt;
use storefront_core::Entity;

use crate::capability::{Deliverable, Refundable};

/// Product variants in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
    Book,
    Phone,
    Laptop,
}

/// Fields shared by every product variant.
///
/// Only constructible through [`ProductInfo::new`], so a held value always
/// has a non-negative price. The id cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInfo {
    id: String,
    name: String,
    price: f64,
}

impl ProductInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        // NaN compares false against zero, so test finiteness separately
        if !price.is_finite() || price < 0.0 {
            return Err(ProductError::InvalidPrice(price));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for ProductInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{id='{}', name='{}', price={}}}",
            self.id, self.name, self.price
        )
    }
}

/// A sellable item.
///
/// Capabilities are looked up per axis: a variant overrides
/// `as_deliverable` and/or `as_refundable` to expose the ones it supports.
/// Callers must treat `None` as "skip", not as an error.
pub trait Product: Entity + fmt::Debug + fmt::Display + Send + Sync {
    fn info(&self) -> &ProductInfo;

    fn kind(&self) -> ProductKind;

    fn name(&self) -> &str {
        self.info().name()
    }

    fn price(&self) -> f64 {
        self.info().price()
    }

    fn as_deliverable(&self) -> Option<&dyn Deliverable> {
        None
    }

    fn as_refundable(&self) -> Option<&dyn Refundable> {
        None
    }
}

/// Product-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("{}", invalid_price_message(.0))]
    InvalidPrice(f64),

    #[error("{message}")]
    NonRefundable { product_id: String, message: String },
}

fn invalid_price_message(price: &f64) -> String {
    if price.is_finite() {
        "Price cannot be negative".to_string()
    } else {
        format!("Price must be a finite number, got {}", price)
    }
}
