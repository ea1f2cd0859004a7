use crate::domain::catalog::Catalog;
use crate::domain::cost::{CostBreakdown, Fees, calculate_cost};
use crate::domain::ports::{OrderSource, ReceiptSink};
use crate::domain::receipt::Receipt;
use crate::error::Result;
use tracing::{debug, info, warn};

/// The main entry point for pricing an order.
///
/// `Checkout` owns the catalog and fee rates. It pulls an order from an
/// [`OrderSource`], prices it, and hands the receipt to a [`ReceiptSink`].
pub struct Checkout {
    catalog: Catalog,
    fees: Fees,
}

impl Checkout {
    /// Creates a new `Checkout` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The products and unit prices orders are priced against.
    /// * `fees` - Gift-wrap and shipping rates.
    pub fn new(catalog: Catalog, fees: Fees) -> Self {
        Self { catalog, fees }
    }

    /// Reads one order, prices it and writes the receipt.
    ///
    /// Returns the receipt that was written.
    pub fn run(&self, source: &mut dyn OrderSource, sink: &mut dyn ReceiptSink) -> Result<Receipt> {
        let order = source.read_order(&self.catalog)?;
        info!(
            items = order.total_quantity(),
            wrapped_lines = order.wrapped_lines(),
            "Order received"
        );

        let cost = calculate_cost(&self.catalog, &order, &self.fees);
        debug!(
            rule = %cost.discount.rule,
            amount = %cost.discount.amount.value(),
            subtotal = %cost.subtotal.value(),
            "Discount selected"
        );

        warn_if_negative_subtotal(&cost);

        let receipt = Receipt::new(&self.catalog, &order, cost);
        sink.write_receipt(&receipt)?;
        info!(total = %receipt.cost.total.value(), "Receipt written");

        Ok(receipt)
    }
}

/// Flags a discounted subtotal below zero. The value is left unclamped.
///
/// Returns whether the warning fired.
fn warn_if_negative_subtotal(cost: &CostBreakdown) -> bool {
    if !cost.discounted_subtotal.is_negative() {
        return false;
    }
    warn!(
        discounted_subtotal = %cost.discounted_subtotal.value(),
        "Discount exceeds subtotal; discounted subtotal is negative and left unclamped"
    );
    true
}
