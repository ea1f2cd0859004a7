use super::catalog::Catalog;
use super::order::Order;
use super::receipt::Receipt;
use crate::error::Result;

/// Supplies a validated order for a catalog.
pub trait OrderSource {
    fn read_order(&mut self, catalog: &Catalog) -> Result<Order>;
}

/// Consumes a finished receipt.
pub trait ReceiptSink {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()>;
}

pub type OrderSourceBox = Box<dyn OrderSource>;
pub type ReceiptSinkBox = Box<dyn ReceiptSink>;
