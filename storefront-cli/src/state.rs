use std::sync::Arc;
use storefront_catalog::Product;
use storefront_core::Customer;
use storefront_order::Order;
use storefront_store::Store;

/// One independent store per entity kind. Nothing checks references
/// between them.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub products: Store<Arc<dyn Product>>,
    pub customers: Store<Customer>,
    pub orders: Store<Order>,
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            products: Store::new("Product"),
            customers: Store::new("Customer"),
            orders: Store::new("Order"),
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
