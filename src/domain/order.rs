use super::catalog::Catalog;
use super::money::Price;
use crate::error::{CartError, Result};
use serde::{Deserialize, Serialize};

/// Quantity and gift-wrap choice for a single product.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct OrderLine {
    pub quantity: u32,
    pub gift_wrap: bool,
}

impl OrderLine {
    pub fn new(quantity: u32, gift_wrap: bool) -> Self {
        Self {
            quantity,
            gift_wrap,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OrderEntry {
    pub product: String,
    #[serde(flatten)]
    pub line: OrderLine,
}

/// One order line per catalog product, in catalog order.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Order {
    entries: Vec<OrderEntry>,
}

impl Order {
    /// Creates an empty order: every product at quantity zero, nothing wrapped.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let entries = catalog
            .products()
            .map(|p| OrderEntry {
                product: p.name.clone(),
                line: OrderLine::default(),
            })
            .collect();
        Self { entries }
    }

    /// Replaces the line for `product`. Products outside the catalog are rejected.
    pub fn set_line(&mut self, product: &str, line: OrderLine) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.product == product)
            .ok_or_else(|| CartError::UnknownProduct(product.to_string()))?;
        entry.line = line;
        Ok(())
    }

    pub fn line(&self, product: &str) -> Option<OrderLine> {
        self.entries
            .iter()
            .find(|e| e.product == product)
            .map(|e| e.line)
    }

    pub fn entries(&self) -> impl Iterator<Item = &OrderEntry> {
        self.entries.iter()
    }

    /// Pairs each catalog price with its order line, in catalog order.
    ///
    /// A product with no line counts as quantity zero, not wrapped.
    pub fn priced_lines<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (Price, OrderLine)> + 'a {
        catalog
            .products()
            .map(|p| (p.price, self.line(&p.name).unwrap_or_default()))
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.line.quantity)).sum()
    }

    /// Number of lines flagged for gift wrap, regardless of their quantity.
    pub fn wrapped_lines(&self) -> u64 {
        self.entries.iter().filter(|e| e.line.gift_wrap).count() as u64
    }
}
