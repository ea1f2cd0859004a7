use cartcalc::domain::catalog::Catalog;
use cartcalc::domain::cost::{Fees, calculate_cost, package_count};
use cartcalc::domain::discount::{DiscountRule, discount_candidates};
use cartcalc::domain::money::{Fee, Money};
use cartcalc::domain::order::{Order, OrderLine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn random_order(rng: &mut StdRng, catalog: &Catalog) -> Order {
    let mut order = Order::for_catalog(catalog);
    for product in catalog.products() {
        let line = OrderLine::new(rng.gen_range(0..=40), rng.gen_bool(0.5));
        order.set_line(&product.name, line).unwrap();
    }
    order
}

#[test]
fn test_selected_discount_is_first_maximum() {
    let catalog = Catalog::default();
    let fees = Fees {
        gift_wrap: Fee::new(dec!(1)).unwrap(),
        shipping_per_package: Fee::new(dec!(5)).unwrap(),
    };
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let order = random_order(&mut rng, &catalog);
        let cost = calculate_cost(&catalog, &order, &fees);
        let candidates = discount_candidates(cost.subtotal, &catalog, &order);

        let max = candidates.iter().map(|c| c.amount).max().unwrap();
        let first_max = candidates.iter().find(|c| c.amount == max).unwrap();

        assert_eq!(cost.discount, *first_max);
        assert!(cost.discount.amount >= Money::ZERO);
        assert_eq!(cost.discounted_subtotal, cost.subtotal - cost.discount.amount);
        assert_eq!(
            cost.total,
            cost.discounted_subtotal + cost.gift_wrap_total + cost.shipping_total
        );
        assert_eq!(cost.packages, package_count(order.total_quantity()));
        assert_eq!(
            cost.gift_wrap_total,
            Money::new(Decimal::from(order.wrapped_lines()))
        );
    }
}

#[test]
fn test_all_zero_orders_choose_flat() {
    let catalog = Catalog::default();
    let order = Order::for_catalog(&catalog);
    let candidates = discount_candidates(Money::ZERO, &catalog, &order);

    assert!(candidates.iter().all(|c| c.amount == Money::ZERO));
    assert_eq!(candidates.map(|c| c.rule), DiscountRule::ALL);
}

#[test]
fn test_package_count_matches_ceiling_rule() {
    for quantity in 1..=1000u64 {
        assert_eq!(package_count(quantity), quantity.div_ceil(10));
    }
    assert_eq!(package_count(0), 1);
}
