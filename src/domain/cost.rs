use super::catalog::Catalog;
use super::discount::{Discount, select_discount};
use super::money::{Fee, Money};
use super::order::Order;
use serde::{Deserialize, Serialize};

/// Items that fit in one shipping package.
pub const ITEMS_PER_PACKAGE: u64 = 10;

/// Fee rates applied on top of the discounted subtotal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Fees {
    /// Charged once per gift-wrapped line.
    pub gift_wrap: Fee,
    /// Charged once per package.
    pub shipping_per_package: Fee,
}

/// Everything derived from an order: the figures a receipt prints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct CostBreakdown {
    pub subtotal: Money,
    pub discount: Discount,
    /// Subtotal minus the discount. Not clamped, so it can go below zero.
    pub discounted_subtotal: Money,
    pub gift_wrap_total: Money,
    pub packages: u64,
    pub shipping_total: Money,
    pub total: Money,
}

/// Number of packages needed for `total_quantity` items.
///
/// An empty order still ships (and pays for) one package.
pub fn package_count(total_quantity: u64) -> u64 {
    total_quantity.saturating_sub(1) / ITEMS_PER_PACKAGE + 1
}

/// Prices an order against a catalog.
pub fn calculate_cost(catalog: &Catalog, order: &Order, fees: &Fees) -> CostBreakdown {
    let (subtotal, total_quantity, wrapped_lines) = order.priced_lines(catalog).fold(
        (Money::ZERO, 0u64, 0u64),
        |(subtotal, quantity, wrapped), (price, line)| {
            (
                subtotal + price.times(line.quantity),
                quantity + u64::from(line.quantity),
                wrapped + u64::from(line.gift_wrap),
            )
        },
    );

    let discount = select_discount(subtotal, catalog, order);
    let discounted_subtotal = subtotal - discount.amount;

    let gift_wrap_total = fees.gift_wrap.times(wrapped_lines);
    let packages = package_count(total_quantity);
    let shipping_total = fees.shipping_per_package.times(packages);

    CostBreakdown {
        subtotal,
        discount,
        discounted_subtotal,
        gift_wrap_total,
        packages,
        shipping_total,
        total: discounted_subtotal + gift_wrap_total + shipping_total,
    }
}
