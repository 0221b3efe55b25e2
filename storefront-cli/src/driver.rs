//! Sample scenario: seed the stores from configuration, assemble orders,
//! run bulk delivery and refund, pay, then probe the error paths.
//!
//! Every expected failure (duplicate ids, missing ids, bad prices, refused
//! refunds) is handled where it happens and recorded in the report; the
//! scenario keeps going.

use anyhow::Context;
use serde::Serialize;
use std::sync::Arc;
use storefront_catalog::{Book, Delivery, Laptop, Phone, Product, ProductError, Refund};
use storefront_core::{Entity, PaymentReceipt};
use storefront_order::{Order, OrderSummary, PaymentOrchestrator, RefundOutcome};
use storefront_store::StoreError;

use crate::app_config::{CatalogConfig, Config, OrderSeed};
use crate::state::Storefront;

/// Everything the scenario observed, in the order it happened
#[derive(Debug, Default, Serialize)]
pub struct DemoReport {
    pub products: Vec<String>,
    pub orders: Vec<OrderSummary>,
    pub deliveries: Vec<Delivery>,
    pub refunds: Vec<Refund>,
    pub refund_failures: Vec<String>,
    pub payments: Vec<PaymentReceipt>,
    pub recovered_errors: Vec<String>,
}

impl DemoReport {
    fn recover(&mut self, err: impl std::fmt::Display) {
        tracing::warn!("{}", err);
        self.recovered_errors.push(err.to_string());
    }
}

pub fn run(config: &Config) -> anyhow::Result<DemoReport> {
    let mut shop = Storefront::new();
    let mut report = DemoReport::default();

    seed_catalog(&mut shop, &config.catalog, &mut report);

    tracing::info!("=== Products ===");
    let mut products = shop.products.find_all();
    products.sort_by(|a, b| a.id().cmp(b.id()));
    for product in &products {
        tracing::info!("{}", product);
        report.products.push(product.to_string());
    }

    for customer in &config.customers {
        if let Err(err) = shop.customers.add(customer.clone()) {
            report.recover(err);
        }
    }

    for seed in &config.orders {
        match build_order(&shop, seed) {
            Ok(order) => {
                if let Err(err) = shop.orders.add(order) {
                    report.recover(err);
                }
            }
            Err(err) => report.recover(err),
        }
    }

    let mut orders = shop.orders.find_all();
    orders.sort_by(|a, b| a.id().cmp(b.id()));
    for order in &orders {
        process_order(order, config, &mut report);
    }

    tracing::info!("=== Exception Testing ===");
    probe_error_paths(&mut shop, &mut report)?;

    Ok(report)
}

fn seed_catalog(shop: &mut Storefront, catalog: &CatalogConfig, report: &mut DemoReport) {
    let books = catalog.books.iter().map(|s| {
        Book::new(&s.id, &s.name, s.price, &s.author).map(|p| Arc::new(p) as Arc<dyn Product>)
    });
    let phones = catalog.phones.iter().map(|s| {
        Phone::new(&s.id, &s.name, s.price, &s.brand).map(|p| Arc::new(p) as Arc<dyn Product>)
    });
    let laptops = catalog.laptops.iter().map(|s| {
        Laptop::new(&s.id, &s.name, s.price, &s.brand).map(|p| Arc::new(p) as Arc<dyn Product>)
    });

    for product in books.chain(phones).chain(laptops) {
        let added = product
            .map_err(|err| err.to_string())
            .and_then(|p| shop.products.add(p).map_err(|err| err.to_string()));
        if let Err(message) = added {
            report.recover(message);
        }
    }
}

/// Resolve a seed's customer and products from the stores
fn build_order(shop: &Storefront, seed: &OrderSeed) -> Result<Order, StoreError> {
    let customer = shop
        .customers
        .get(&seed.customer_id)
        .cloned()
        .ok_or_else(|| StoreError::NotFound {
            kind: shop.customers.kind(),
            id: seed.customer_id.clone(),
        })?;

    let mut order = Order::new(&seed.id, customer);
    for product_id in &seed.product_ids {
        let product = shop
            .products
            .get(product_id)
            .ok_or_else(|| StoreError::NotFound {
                kind: shop.products.kind(),
                id: product_id.clone(),
            })?;
        order.add_product(Arc::clone(product));
    }

    Ok(order)
}

fn process_order(order: &Order, config: &Config, report: &mut DemoReport) {
    tracing::info!("=== Order Details ===");
    tracing::info!(
        customer = %order.customer(),
        items = order.products().len(),
        "{}",
        order
    );
    report.orders.push(order.summary());

    tracing::info!("=== Delivering Products ===");
    report.deliveries.extend(order.deliver_all());

    tracing::info!("=== Refunding Products ===");
    let refunds = order.refund_all();
    if !refunds.is_clean() {
        tracing::warn!(
            order_id = order.id(),
            rejected = refunds.rejected().count(),
            "order was only partially refunded"
        );
    }
    for outcome in refunds.outcomes {
        match outcome {
            RefundOutcome::Refunded(refund) => report.refunds.push(refund),
            RefundOutcome::Rejected(err) => report.refund_failures.push(err.to_string()),
        }
    }

    tracing::info!("=== Payment ===");
    for method in &config.payment.methods {
        let receipt = PaymentOrchestrator::from(*method).settle(order);
        report.payments.push(receipt);
    }
}

fn probe_error_paths(shop: &mut Storefront, report: &mut DemoReport) -> anyhow::Result<()> {
    // Re-adding a stored product must be refused and leave it untouched
    if let Some(existing) = shop.products.find_all().into_iter().min_by(|a, b| a.id().cmp(b.id())) {
        match shop.products.add(existing) {
            Err(err @ StoreError::DuplicateId { .. }) => report.recover(err),
            Err(err) => return Err(err).context("unexpected store failure while re-adding a product"),
            Ok(()) => anyhow::bail!("store accepted a duplicate product id"),
        }
    }

    match Laptop::new("l2", "XPS 13", -100.0, "Dell") {
        Err(err @ ProductError::InvalidPrice(_)) => report.recover(err),
        Err(err) => return Err(err).context("unexpected failure constructing a product"),
        Ok(_) => anyhow::bail!("product with a negative price was constructed"),
    }

    Ok(())
}
