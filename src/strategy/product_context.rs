#[derive(Debug, Clone)]
pub struct ProductContext {
    pub product: String,

    /// Fair value used when the book cannot price the product.
    pub default_fair_value: f64,
}

impl ProductContext {
    pub fn new(product: &str, default_fair_value: f64) -> Self {
        Self {
            product: product.to_string(),
            default_fair_value,
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn default_fair_value(&self) -> f64 {
        self.default_fair_value
    }
}

pub trait WithContext {
    fn ctx(&self) -> &ProductContext;
}
