use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use storefront_catalog::{Delivery, Product};
use storefront_core::{Customer, Entity};

use crate::fulfillment::{RefundOutcome, RefundReport};

/// A customer's purchase: a list of shared product handles.
///
/// The order references products, it does not own their lifecycle, and it
/// does not check that they still exist in any store. The same product may
/// appear more than once.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    customer: Customer,
    products: Vec<Arc<dyn Product>>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: impl Into<String>, customer: Customer) -> Self {
        Self {
            id: id.into(),
            customer,
            products: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn products(&self) -> &[Arc<dyn Product>] {
        &self.products
    }

    /// Append a product reference; duplicates are kept
    pub fn add_product(&mut self, product: Arc<dyn Product>) {
        self.products.push(product);
    }

    /// Sum of referenced prices, recomputed on every call
    pub fn total(&self) -> f64 {
        self.products.iter().map(|p| p.price()).sum()
    }

    /// Deliver every product that supports delivery, in insertion order
    pub fn deliver_all(&self) -> Vec<Delivery> {
        self.products
            .iter()
            .filter_map(|p| p.as_deliverable())
            .map(|d| d.deliver())
            .collect()
    }

    /// Refund every refundable product.
    ///
    /// Policy refusals are recorded in the report and logged; one refusal
    /// never stops the remaining refunds.
    pub fn refund_all(&self) -> RefundReport {
        let mut report = RefundReport::default();

        for product in &self.products {
            let Some(refundable) = product.as_refundable() else {
                continue;
            };

            match refundable.refund() {
                Ok(refund) => report.outcomes.push(RefundOutcome::Refunded(refund)),
                Err(err) => {
                    tracing::warn!(order_id = %self.id, product_id = product.id(), "{}", err);
                    report.outcomes.push(RefundOutcome::Rejected(err));
                }
            }
        }

        report
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id.clone(),
            customer_id: self.customer.id().to_string(),
            customer_name: self.customer.name().to_string(),
            product_ids: self.products.iter().map(|p| p.id().to_string()).collect(),
            total: self.total(),
            created_at: self.created_at,
        }
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id='{}', customer={}, total={}}}",
            self.id,
            self.customer.name(),
            self.total()
        )
    }
}

/// Serializable view of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub product_ids: Vec<String>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Book, Laptop, Phone, ProductError, ProductInfo, ProductKind};
    use storefront_store::Store;

    /// Product that opts into neither delivery nor refunds
    #[derive(Debug)]
    struct Voucher(ProductInfo);

    impl Entity for Voucher {
        fn id(&self) -> &str {
            self.0.id()
        }
    }

    impl Product for Voucher {
        fn info(&self) -> &ProductInfo {
            &self.0
        }

        fn kind(&self) -> ProductKind {
            ProductKind::Book
        }
    }

    impl fmt::Display for Voucher {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    fn voucher() -> Arc<dyn Product> {
        Arc::new(Voucher(ProductInfo::new("v1", "Voucher", 5.0).unwrap()))
    }

    fn book() -> Arc<dyn Product> {
        Arc::new(Book::new("b1", "Java Basics", 200.0, "Nguyen").unwrap())
    }

    fn phone() -> Arc<dyn Product> {
        Arc::new(Phone::new("p1", "iPhone 15", 2500.0, "Apple").unwrap())
    }

    fn laptop() -> Arc<dyn Product> {
        Arc::new(Laptop::new("l1", "ThinkPad X1", 3000.0, "Lenovo").unwrap())
    }

    fn alice() -> Customer {
        Customer::new("c1", "Alice")
    }

    #[test]
    fn test_total_tracks_products() {
        let mut order = Order::new("o1", alice());
        assert_eq!(order.total(), 0.0);

        order.add_product(book());
        assert_eq!(order.total(), 200.0);

        order.add_product(phone());
        assert_eq!(order.total(), 2700.0);

        // Same product twice counts twice
        let shared = laptop();
        order.add_product(shared.clone());
        order.add_product(shared);
        assert_eq!(order.total(), 8700.0);
        assert_eq!(order.products().len(), 4);
    }

    #[test]
    fn test_deliver_all_in_insertion_order() {
        let mut order = Order::new("o1", alice());
        order.add_product(laptop());
        order.add_product(book());
        order.add_product(book());

        let ids: Vec<String> = order.deliver_all().into_iter().map(|d| d.product_id).collect();
        assert_eq!(ids, vec!["l1", "b1", "b1"]);
    }

    #[test]
    fn test_refund_all_continues_past_rejection() {
        let mut order = Order::new("o1", alice());
        order.add_product(laptop());
        order.add_product(book());

        let report = order.refund_all();
        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(
            &report.outcomes[0],
            RefundOutcome::Rejected(ProductError::NonRefundable { product_id, .. }) if product_id == "l1"
        ));
        assert!(matches!(&report.outcomes[1], RefundOutcome::Refunded(r) if r.product_id == "b1"));
        assert_eq!(report.refunded_total(), 200.0);
    }

    #[test]
    fn test_bulk_operations_skip_products_without_capabilities() {
        let mut order = Order::new("o1", alice());
        order.add_product(voucher());
        order.add_product(laptop());
        order.add_product(book());

        assert_eq!(order.total(), 3205.0);

        let delivered: Vec<String> =
            order.deliver_all().into_iter().map(|d| d.product_id).collect();
        assert_eq!(delivered, vec!["l1", "b1"]);

        let report = order.refund_all();
        assert_eq!(report.outcomes.len(), 2);
        assert!(matches!(&report.outcomes[0], RefundOutcome::Rejected(_)));
        assert!(matches!(&report.outcomes[1], RefundOutcome::Refunded(r) if r.product_id == "b1"));
        assert!(report.refunded().all(|r| r.product_id != "v1"));
    }

    #[test]
    fn test_order_survives_store_changes() {
        let mut products: Store<Arc<dyn Product>> = Store::new("Product");
        let book = book();
        products.add(book.clone()).unwrap();

        let mut order = Order::new("o1", alice());
        order.add_product(book.clone());

        assert!(products.add(book).is_err());
        products.delete("b1").unwrap();

        assert_eq!(order.total(), 200.0);
        assert_eq!(order.deliver_all().len(), 1);
    }

    #[test]
    fn test_display_and_summary() {
        let mut order = Order::new("o1", alice());
        order.add_product(book());
        order.add_product(phone());
        order.add_product(laptop());

        assert_eq!(order.to_string(), "Order{id='o1', customer=Alice, total=5700}");

        let summary = order.summary();
        assert_eq!(summary.product_ids, vec!["b1", "p1", "l1"]);
        assert_eq!(summary.customer_id, "c1");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 5700.0);
    }
}
