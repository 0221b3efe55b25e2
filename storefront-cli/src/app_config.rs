use serde::Deserialize;
use std::env;
use storefront_core::{Customer, PaymentMethod};

/// Built-in defaults, overridden by files on disk and the environment
const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub orders: Vec<OrderSeed>,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub books: Vec<BookSeed>,
    #[serde(default)]
    pub phones: Vec<BrandedSeed>,
    #[serde(default)]
    pub laptops: Vec<BrandedSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookSeed {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub author: String,
}

/// Seed for variants carrying a brand (phones, laptops)
#[derive(Debug, Deserialize, Clone)]
pub struct BrandedSeed {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub brand: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OrderSeed {
    pub id: String,
    pub customer_id: String,
    pub product_ids: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    #[serde(default = "default_methods")]
    pub methods: Vec<PaymentMethod>,
}

fn default_methods() -> Vec<PaymentMethod> {
    PaymentMethod::ALL.to_vec()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment file, e.g. config/test.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // STOREFRONT__LOGGING__FILTER=debug sets logging.filter
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Load from a TOML document only, ignoring files and environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_sample_catalog() {
        let config = Config::defaults().unwrap();
        assert_eq!(config.logging.filter, "storefront=info");
        assert_eq!(config.catalog.books[0].author, "Nguyen");
        assert_eq!(config.catalog.phones[0].price, 2500.0);
        assert_eq!(config.catalog.laptops[0].brand, "Lenovo");
        assert_eq!(config.customers[0], Customer::new("c1", "Alice"));
        assert_eq!(config.orders[0].product_ids, vec!["b1", "p1", "l1"]);
        assert_eq!(config.payment.methods, PaymentMethod::ALL.to_vec());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = Config::from_toml_str(
            r#"
            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();

        assert!(config.catalog.books.is_empty());
        assert!(config.orders.is_empty());
        assert_eq!(config.payment.methods.len(), 3);
    }
}
