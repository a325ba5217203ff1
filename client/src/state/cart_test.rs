use super::*;

fn cart_with_tee() -> CartState {
    let mut cart = CartState::default();
    cart.add("tee-01", "Organic Tee", 2400);
    cart
}

#[test]
fn add_creates_a_new_line() {
    let cart = cart_with_tee();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

#[test]
fn add_increments_an_existing_line() {
    let mut cart = cart_with_tee();
    cart.add("tee-01", "Organic Tee", 2400);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
}

#[test]
fn set_quantity_updates_the_line() {
    let mut cart = cart_with_tee();
    cart.set_quantity("tee-01", 5);
    assert_eq!(cart.items[0].quantity, 5);
}

#[test]
fn set_quantity_zero_removes_the_line() {
    let mut cart = cart_with_tee();
    cart.set_quantity("tee-01", 0);
    assert!(cart.is_empty());
}

#[test]
fn set_quantity_ignores_unknown_ids() {
    let mut cart = cart_with_tee();
    cart.set_quantity("missing", 3);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
}

#[test]
fn remove_deletes_only_the_named_line() {
    let mut cart = cart_with_tee();
    cart.add("mug-01", "Stoneware Mug", 1800);
    cart.remove("tee-01");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product_id, "mug-01");
}

#[test]
fn count_and_total_sum_across_lines() {
    let mut cart = cart_with_tee();
    cart.add("mug-01", "Stoneware Mug", 1800);
    cart.add("mug-01", "Stoneware Mug", 1800);
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total_cents(), 2400 + 2 * 1800);
}

#[test]
fn format_price_pads_cents() {
    assert_eq!(format_price_cents(1999), "$19.99");
    assert_eq!(format_price_cents(500), "$5.00");
    assert_eq!(format_price_cents(7), "$0.07");
}

#[test]
fn cart_round_trips_through_json() {
    let cart = cart_with_tee();
    let raw = serde_json::to_string(&cart).expect("cart should serialize");
    let parsed: CartState = serde_json::from_str(&raw).expect("cart should parse");
    assert_eq!(parsed, cart);
}
