use super::catalog::Catalog;
use super::cost::CostBreakdown;
use super::money::Money;
use super::order::Order;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ReceiptLine {
    pub product: String,
    pub quantity: u32,
    pub gift_wrap: bool,
    /// Unit price times quantity, before any discount.
    pub line_total: Money,
}

/// What the output side gets to render: per-product lines plus the breakdown.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    #[serde(flatten)]
    pub cost: CostBreakdown,
}

impl Receipt {
    pub fn new(catalog: &Catalog, order: &Order, cost: CostBreakdown) -> Self {
        let lines = catalog
            .products()
            .map(|product| {
                let line = order.line(&product.name).unwrap_or_default();
                ReceiptLine {
                    product: product.name.clone(),
                    quantity: line.quantity,
                    gift_wrap: line.gift_wrap,
                    line_total: product.price.times(line.quantity),
                }
            })
            .collect();
        Self { lines, cost }
    }
}
