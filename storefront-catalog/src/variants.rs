use serde::Serialize;
use std::fmt;
use storefront_core::Entity;

use crate::capability::{Deliverable, Delivery, Refund, Refundable};
use crate::product::{Product, ProductError, ProductInfo, ProductKind};

fn delivered(info: &ProductInfo, description: String) -> Delivery {
    tracing::info!(product_id = info.id(), "{}", description);
    Delivery {
        product_id: info.id().to_string(),
        description,
    }
}

fn refunded(info: &ProductInfo, description: String) -> Refund {
    tracing::info!(product_id = info.id(), amount = info.price(), "{}", description);
    Refund {
        product_id: info.id().to_string(),
        amount: info.price(),
        description,
    }
}

/// Book: deliverable and refundable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    #[serde(flatten)]
    info: ProductInfo,
    author: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        author: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Ok(Self {
            info: ProductInfo::new(id, name, price)?,
            author: author.into(),
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl Entity for Book {
    fn id(&self) -> &str {
        self.info.id()
    }
}

impl Product for Book {
    fn info(&self) -> &ProductInfo {
        &self.info
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Book
    }

    fn as_deliverable(&self) -> Option<&dyn Deliverable> {
        Some(self)
    }

    fn as_refundable(&self) -> Option<&dyn Refundable> {
        Some(self)
    }
}

impl Deliverable for Book {
    fn deliver(&self) -> Delivery {
        delivered(
            &self.info,
            format!("Delivering book: {} by {}", self.info.name(), self.author),
        )
    }
}

impl Refundable for Book {
    fn refund(&self) -> Result<Refund, ProductError> {
        Ok(refunded(&self.info, format!("Refunding book: {}", self.info.name())))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, author='{}'", self.info, self.author)
    }
}

/// Phone: deliverable and refundable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    #[serde(flatten)]
    info: ProductInfo,
    brand: String,
}

impl Phone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Ok(Self {
            info: ProductInfo::new(id, name, price)?,
            brand: brand.into(),
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

impl Entity for Phone {
    fn id(&self) -> &str {
        self.info.id()
    }
}

impl Product for Phone {
    fn info(&self) -> &ProductInfo {
        &self.info
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Phone
    }

    fn as_deliverable(&self) -> Option<&dyn Deliverable> {
        Some(self)
    }

    fn as_refundable(&self) -> Option<&dyn Refundable> {
        Some(self)
    }
}

impl Deliverable for Phone {
    fn deliver(&self) -> Delivery {
        delivered(
            &self.info,
            format!("Delivering phone: {} {}", self.brand, self.info.name()),
        )
    }
}

impl Refundable for Phone {
    fn refund(&self) -> Result<Refund, ProductError> {
        Ok(refunded(&self.info, format!("Refunding phone: {}", self.info.name())))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, brand='{}'", self.info, self.brand)
    }
}

/// Laptop: deliverable, takes part in refunds but always refuses them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Laptop {
    #[serde(flatten)]
    info: ProductInfo,
    brand: String,
}

impl Laptop {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> Result<Self, ProductError> {
        Ok(Self {
            info: ProductInfo::new(id, name, price)?,
            brand: brand.into(),
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

impl Entity for Laptop {
    fn id(&self) -> &str {
        self.info.id()
    }
}

impl Product for Laptop {
    fn info(&self) -> &ProductInfo {
        &self.info
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Laptop
    }

    fn as_deliverable(&self) -> Option<&dyn Deliverable> {
        Some(self)
    }

    fn as_refundable(&self) -> Option<&dyn Refundable> {
        Some(self)
    }
}

impl Deliverable for Laptop {
    fn deliver(&self) -> Delivery {
        delivered(
            &self.info,
            format!("Delivering laptop: {} {}", self.brand, self.info.name()),
        )
    }
}

impl Refundable for Laptop {
    fn refund(&self) -> Result<Refund, ProductError> {
        Err(ProductError::NonRefundable {
            product_id: self.info.id().to_string(),
            message: format!("Laptop {} cannot be refunded!", self.info.name()),
        })
    }
}

impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, brand='{}'", self.info, self.brand)
    }
}
