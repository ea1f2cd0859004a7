//! Discount rules and best-discount selection.
//!
//! Four rules are evaluated independently against the order and exactly one is
//! applied: the one worth the most. Candidates are kept in a fixed order so that
//! ties always resolve to the earlier rule.

use super::catalog::Catalog;
use super::money::Money;
use super::order::Order;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

const FLAT_THRESHOLD: Decimal = dec!(200);
const FLAT_AMOUNT: Decimal = dec!(10);

const BULK_5_MIN_QUANTITY: u32 = 10;
const BULK_5_RATE: Decimal = dec!(0.05);

const BULK_10_MIN_TOTAL_QUANTITY: u64 = 20;
const BULK_10_RATE: Decimal = dec!(0.10);

const TIERED_50_THRESHOLD: u32 = 15;
const TIERED_50_RATE: Decimal = dec!(0.50);

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum DiscountRule {
    /// 10 off when the subtotal exceeds 200.
    #[serde(rename = "flat")]
    Flat,
    /// 5% off the largest single line with more than 10 units.
    #[serde(rename = "bulk-5")]
    Bulk5,
    /// 10% off the subtotal when more than 20 units are ordered in total.
    #[serde(rename = "bulk-10")]
    Bulk10,
    /// 50% off every unit beyond the 15th, per line.
    #[serde(rename = "tiered-50")]
    Tiered50,
}

impl DiscountRule {
    /// Evaluation order, which doubles as the tie-break order.
    pub const ALL: [DiscountRule; 4] = [Self::Flat, Self::Bulk5, Self::Bulk10, Self::Tiered50];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Bulk5 => "bulk-5",
            Self::Bulk10 => "bulk-10",
            Self::Tiered50 => "tiered-50",
        }
    }

    /// Amount this rule is worth for the given order.
    pub fn evaluate(&self, subtotal: Money, catalog: &Catalog, order: &Order) -> Money {
        match self {
            Self::Flat => {
                if subtotal.value() > FLAT_THRESHOLD {
                    Money::new(FLAT_AMOUNT)
                } else {
                    Money::ZERO
                }
            }
            Self::Bulk5 => order
                .priced_lines(catalog)
                .filter(|(_, line)| line.quantity > BULK_5_MIN_QUANTITY)
                .map(|(price, line)| price.times(line.quantity).scale(BULK_5_RATE))
                .max()
                .unwrap_or(Money::ZERO),
            Self::Bulk10 => {
                let total_quantity: u64 = order
                    .priced_lines(catalog)
                    .map(|(_, line)| u64::from(line.quantity))
                    .sum();
                if total_quantity > BULK_10_MIN_TOTAL_QUANTITY {
                    subtotal.scale(BULK_10_RATE)
                } else {
                    Money::ZERO
                }
            }
            Self::Tiered50 => order
                .priced_lines(catalog)
                .filter(|(_, line)| line.quantity > TIERED_50_THRESHOLD)
                .map(|(price, line)| price.times(line.quantity - TIERED_50_THRESHOLD))
                .sum::<Money>()
                .scale(TIERED_50_RATE),
        }
    }
}

impl fmt::Display for DiscountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A discount rule together with what it is worth.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct Discount {
    pub rule: DiscountRule,
    pub amount: Money,
}

/// Every rule's amount, in [`DiscountRule::ALL`] order.
pub fn discount_candidates(subtotal: Money, catalog: &Catalog, order: &Order) -> [Discount; 4] {
    DiscountRule::ALL.map(|rule| Discount {
        rule,
        amount: rule.evaluate(subtotal, catalog, order),
    })
}

/// Picks the largest candidate. On a tie the earlier rule wins, so an order that
/// qualifies for nothing gets `flat` with a zero amount.
pub fn select_discount(subtotal: Money, catalog: &Catalog, order: &Order) -> Discount {
    let [first, rest @ ..] = discount_candidates(subtotal, catalog, order);
    rest.into_iter()
        .fold(first, |best, candidate| {
            if candidate.amount > best.amount {
                candidate
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use crate::domain::money::Price;
    use crate::domain::order::OrderLine;

    fn order_with(catalog: &Catalog, lines: &[(&str, u32)]) -> Order {
        let mut order = Order::for_catalog(catalog);
        for (product, quantity) in lines {
            order
                .set_line(product, OrderLine::new(*quantity, false))
                .unwrap();
        }
        order
    }

    fn subtotal(catalog: &Catalog, order: &Order) -> Money {
        order
            .priced_lines(catalog)
            .map(|(price, line)| price.times(line.quantity))
            .sum()
    }

    fn amounts(catalog: &Catalog, order: &Order) -> Vec<Money> {
        discount_candidates(subtotal(catalog, order), catalog, order)
            .iter()
            .map(|d| d.amount)
            .collect()
    }

    #[test]
    fn test_empty_order_selects_flat_zero() {
        let catalog = Catalog::default();
        let order = Order::for_catalog(&catalog);
        let discount = select_discount(Money::ZERO, &catalog, &order);
        assert_eq!(discount.rule, DiscountRule::Flat);
        assert_eq!(discount.amount, Money::ZERO);
    }

    #[test]
    fn test_flat_requires_subtotal_above_200() {
        let catalog = Catalog::default();
        // 10 x 20 = 200, not above the threshold
        let order = order_with(&catalog, &[("Product A", 10)]);
        assert_eq!(amounts(&catalog, &order)[0], Money::ZERO);

        // 5 x 50 = 250
        let order = order_with(&catalog, &[("Product C", 5)]);
        let discount = select_discount(subtotal(&catalog, &order), &catalog, &order);
        assert_eq!(discount.rule, DiscountRule::Flat);
        assert_eq!(discount.amount, Money::new(dec!(10)));
    }

    #[test]
    fn test_bulk_5_takes_largest_single_line() {
        let catalog = Catalog::default();
        // A: 11 x 20 = 220 -> 11; B: 12 x 40 = 480 -> 24
        let order = order_with(&catalog, &[("Product A", 11), ("Product B", 12)]);
        assert_eq!(amounts(&catalog, &order)[1], Money::new(dec!(24)));

        // exactly 10 units does not qualify
        let order = order_with(&catalog, &[("Product C", 10)]);
        assert_eq!(amounts(&catalog, &order)[1], Money::ZERO);
    }

    #[test]
    fn test_bulk_10_uses_total_quantity() {
        let catalog = Catalog::default();
        // 7 + 7 + 7 = 21 units, subtotal 140 + 280 + 350 = 770
        let order = order_with(
            &catalog,
            &[("Product A", 7), ("Product B", 7), ("Product C", 7)],
        );
        let discount = select_discount(subtotal(&catalog, &order), &catalog, &order);
        assert_eq!(discount.rule, DiscountRule::Bulk10);
        assert_eq!(discount.amount, Money::new(dec!(77)));

        // exactly 20 units does not qualify
        let order = order_with(&catalog, &[("Product A", 10), ("Product B", 10)]);
        assert_eq!(amounts(&catalog, &order)[2], Money::ZERO);
    }

    #[test]
    fn test_tiered_50_sums_units_beyond_fifteen() {
        let catalog = Catalog::default();
        let order = order_with(&catalog, &[("Product A", 25)]);
        assert_eq!(
            amounts(&catalog, &order),
            vec![
                Money::new(dec!(10)),
                Money::new(dec!(25)),
                Money::new(dec!(50)),
                Money::new(dec!(100)),
            ]
        );
        let discount = select_discount(Money::new(dec!(500)), &catalog, &order);
        assert_eq!(discount.rule, DiscountRule::Tiered50);
        assert_eq!(discount.amount, Money::new(dec!(100)));

        // A: 16 -> 1 x 20, B: 17 -> 2 x 40; (20 + 80) / 2 = 50
        let order = order_with(&catalog, &[("Product A", 16), ("Product B", 17)]);
        assert_eq!(amounts(&catalog, &order)[3], Money::new(dec!(50)));
    }

    #[test]
    fn test_tie_resolves_to_earlier_rule() {
        let catalog = Catalog::new(vec![
            Product {
                name: "X".to_string(),
                price: Price::new(dec!(12.5)).unwrap(),
            },
            Product {
                name: "Y".to_string(),
                price: Price::new(dec!(1)).unwrap(),
            },
        ])
        .unwrap();
        // subtotal 201 over 17 units: flat 10, bulk-5 10, bulk-10 0, tiered-50 6.25
        let order = order_with(&catalog, &[("X", 16), ("Y", 1)]);
        assert_eq!(
            amounts(&catalog, &order),
            vec![
                Money::new(dec!(10)),
                Money::new(dec!(10)),
                Money::ZERO,
                Money::new(dec!(6.25)),
            ]
        );

        let discount = select_discount(subtotal(&catalog, &order), &catalog, &order);
        assert_eq!(discount.rule, DiscountRule::Flat);
        assert_eq!(discount.amount, Money::new(dec!(10)));
    }

    #[test]
    fn test_rule_names() {
        let names: Vec<String> = DiscountRule::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["flat", "bulk-5", "bulk-10", "tiered-50"]);
        assert_eq!(
            serde_json::to_string(&DiscountRule::Tiered50).unwrap(),
            "\"tiered-50\""
        );
    }
}
