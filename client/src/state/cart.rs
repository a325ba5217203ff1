//! Client-side cart state.
//!
//! DESIGN
//! ======
//! Line items keyed by product id; quantities and totals are derived on
//! read. Checkout/payment is out of scope for this layer, so the cart
//! never talks to the network — it persists via `util::cart_storage`.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

/// A single cart line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: u32,
    pub quantity: u32,
}

/// Shared cart state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add one unit of a product, creating the line if it is new.
    pub fn add(&mut self, product_id: &str, name: &str, unit_price_cents: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem {
            product_id: product_id.to_owned(),
            name: name.to_owned(),
            unit_price_cents,
            quantity: 1,
        });
    }

    /// Set a line's quantity; zero removes the line. Unknown ids are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Total price in cents across all lines.
    #[must_use]
    pub fn total_cents(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.unit_price_cents) * u64::from(item.quantity))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Render a cent amount as a dollar string (e.g. `1999` → `"$19.99"`).
#[must_use]
pub fn format_price_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
