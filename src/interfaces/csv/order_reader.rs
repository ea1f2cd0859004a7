use crate::domain::catalog::Catalog;
use crate::domain::order::{Order, OrderLine};
use crate::domain::ports::OrderSource;
use crate::error::{CartError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;

/// One row of an order file: `product, quantity, gift_wrap`.
///
/// `gift_wrap` may be left off a row, or dropped from the header entirely;
/// either way it reads as no.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRow {
    pub product: String,
    pub quantity: u32,
    #[serde(default, deserialize_with = "deserialize_yes_no")]
    pub gift_wrap: bool,
}

fn deserialize_yes_no<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no for gift_wrap, got '{other}'"
        ))),
    }
}

/// Reads an order from a CSV source.
///
/// Products missing from the file keep quantity zero. A product listed twice,
/// or one the catalog does not know, fails the whole order.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes the rows of the file.
    ///
    /// Rows shorter than the header are padded with empty fields first, since
    /// csv reports a missing trailing field as an error rather than a default.
    pub fn rows(&mut self) -> Result<impl Iterator<Item = Result<OrderRow>> + '_> {
        let headers = self.reader.headers()?.clone();
        let width = headers.len();
        Ok(self.reader.records().map(move |record| -> Result<OrderRow> {
            let mut record = record?;
            while record.len() < width {
                record.push_field("");
            }
            Ok(record.deserialize(Some(&headers))?)
        }))
    }
}

impl<R: Read> OrderSource for OrderReader<R> {
    fn read_order(&mut self, catalog: &Catalog) -> Result<Order> {
        let mut order = Order::for_catalog(catalog);
        let mut seen = HashSet::new();
        for row in self.rows()? {
            let row = row?;
            if !seen.insert(row.product.clone()) {
                return Err(CartError::DuplicateProduct(row.product));
            }
            order.set_line(&row.product, OrderLine::new(row.quantity, row.gift_wrap))?;
        }
        Ok(order)
    }
}
