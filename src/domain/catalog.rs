use super::money::Price;
use crate::error::{CartError, Result};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    pub name: String,
    pub price: Price,
}

/// The fixed price list an order is checked out against.
///
/// Products keep their insertion order, which is also the order of order lines
/// and receipt lines. Names are unique.
#[derive(Debug, PartialEq, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists, blank names and duplicates.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(CartError::ValidationError(
                "Catalog must contain at least one product".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CartError::ValidationError(
                    "Product name must not be empty".to_string(),
                ));
            }
            if !seen.insert(product.name.as_str()) {
                return Err(CartError::DuplicateProduct(product.name.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn price_of(&self, name: &str) -> Option<Price> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.price)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let product = |name: &str, price| Product {
            name: name.to_string(),
            price: Price::new_unchecked(price),
        };
        Self {
            products: vec![
                product("Product A", dec!(20)),
                product("Product B", dec!(40)),
                product("Product C", dec!(50)),
            ],
        }
    }
}
