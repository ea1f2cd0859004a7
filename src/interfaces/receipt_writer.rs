use crate::domain::ports::ReceiptSink;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use std::io::Write;

/// Renders a human-readable receipt.
pub struct TextReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReceiptSink for TextReceiptWriter<W> {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        let w = &mut self.writer;
        let cost = &receipt.cost;

        writeln!(w, "Order Details:")?;
        for line in &receipt.lines {
            writeln!(
                w,
                "{} - Quantity: {}, Gift Wrap: {}, Total: {}",
                line.product,
                line.quantity,
                if line.gift_wrap { "Yes" } else { "No" },
                line.line_total
            )?;
        }
        writeln!(w)?;
        writeln!(w, "Subtotal: {}", cost.subtotal)?;
        writeln!(
            w,
            "{} applied - Discount Amount: {}",
            cost.discount.rule, cost.discount.amount
        )?;
        writeln!(w, "Discounted Subtotal: {}", cost.discounted_subtotal)?;
        writeln!(w, "Gift Wrap Fee: {}", cost.gift_wrap_total)?;
        writeln!(
            w,
            "Shipping Fee: {} ({} package{})",
            cost.shipping_total,
            cost.packages,
            if cost.packages == 1 { "" } else { "s" }
        )?;
        writeln!(w, "Total: {}", cost.total)?;
        w.flush()?;
        Ok(())
    }
}

/// Writes the receipt as pretty-printed JSON.
pub struct JsonReceiptWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReceiptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReceiptSink for JsonReceiptWriter<W> {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, receipt)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
