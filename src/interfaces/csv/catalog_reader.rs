use crate::domain::catalog::{Catalog, Product};
use crate::domain::money::Price;
use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct CatalogRow {
    product: String,
    price: Decimal,
}

/// Loads a catalog from CSV with a `product, price` header.
///
/// Row order becomes catalog order. Prices must be positive and no larger
/// than [`MAX_RATE`](crate::domain::money::MAX_RATE).
pub fn read_catalog<R: Read>(source: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let products = reader
        .deserialize::<CatalogRow>()
        .map(|row| -> Result<Product> {
            let row = row.map_err(CartError::from)?;
            Ok(Product {
                price: Price::new(row.price)?,
                name: row.product,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::new(products)
}
