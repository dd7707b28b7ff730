//! # Cart
//!
//! The active checkout session's lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Terminal Action           Cart Method            Cart Change           │
//! │  ───────────────           ───────────            ───────────           │
//! │  Click product / scan ───► add() ───────────────► qty += n or push     │
//! │  +/- or typed quantity ──► set_quantity() ──────► qty = n (≤0 removes) │
//! │  Trash icon ─────────────► remove() ────────────► line dropped         │
//! │  Save / cancel ──────────► clear() ─────────────► empty                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id
//! - Every stored quantity is in `1..=MAX_ITEM_QUANTITY`

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_quantity;

/// One product in the cart with its quantity.
///
/// The line keeps its own copy of the product as it was when first added.
/// Editing or deleting the catalog product does not touch the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    pub fn new(product: Product, quantity: i64) -> Self {
        CartLine { product, quantity }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

/// The ordered set of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product, or increases the quantity if already present.
    ///
    /// The existing line keeps the product copy it was created with. The
    /// merged quantity is bounded like any other; on error the line is
    /// left as it was.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let merged = line
                .quantity
                .checked_add(quantity)
                .ok_or(CoreError::InvalidQuantity { quantity })?;
            validate_quantity(merged)?;
            line.quantity = merged;
            return Ok(());
        }

        self.lines.push(CartLine::new(product.clone(), quantity));
        Ok(())
    }

    /// Replaces a line with exactly `quantity` of `product`.
    ///
    /// A quantity of zero or less removes the line. Otherwise the line is
    /// rebuilt from `product` (so it picks up the current catalog price)
    /// and moves to the end of the cart. A quantity above the line limit
    /// is rejected and the cart is unchanged.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(&product.id);
            return Ok(());
        }

        validate_quantity(quantity)?;
        self.remove(&product.id);
        self.lines.push(CartLine::new(product.clone(), quantity));
        Ok(())
    }

    /// Removes the line for `product_id`, returning it if it was present.
    pub fn remove(&mut self, product_id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product.id == product_id)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ITEM_QUANTITY;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents, 10, "Test")
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add(&product("1", 999), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.lines()[0].line_total().cents(), 1998);
    }

    #[test]
    fn test_cart_add_same_product_accumulates() {
        let mut cart = Cart::new();
        let p = product("1", 999);

        for qty in [2, 3, 1, 7] {
            cart.add(&p, qty).unwrap();
        }

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 13);
    }

    #[test]
    fn test_cart_add_rejects_non_positive() {
        let mut cart = Cart::new();
        let p = product("1", 999);

        assert_eq!(
            cart.add(&p, 0),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            cart.add(&p, -4),
            Err(CoreError::InvalidQuantity { quantity: -4 })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_existing_line_keeps_original_price() {
        let mut cart = Cart::new();
        let mut p = product("1", 1000);
        cart.add(&p, 1).unwrap();

        p.price_cents = 5000;
        cart.add(&p, 1).unwrap();

        let line = cart.line("1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.price_cents, 1000);
    }

    #[test]
    fn test_cart_set_quantity() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        let b = product("b", 200);
        cart.add(&a, 3).unwrap();
        cart.add(&b, 1).unwrap();

        cart.set_quantity(&a, 5).unwrap();
        assert_eq!(cart.line("a").unwrap().quantity, 5);
        assert_eq!(cart.item_count(), 2);

        cart.set_quantity(&a, 0).unwrap();
        assert!(cart.line("a").is_none());

        cart.set_quantity(&b, -1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_set_quantity_rejects_huge_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 11500);
        cart.add(&p, 2).unwrap();

        assert_eq!(
            cart.set_quantity(&p, 9_000_000_000_000_000_000),
            Err(CoreError::InvalidQuantity {
                quantity: 9_000_000_000_000_000_000
            })
        );
        assert_eq!(cart.line("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_cart_merge_is_bounded() {
        let mut cart = Cart::new();
        let p = product("1", 11500);
        cart.add(&p, MAX_ITEM_QUANTITY).unwrap();

        assert_eq!(
            cart.add(&p, 1),
            Err(CoreError::InvalidQuantity {
                quantity: MAX_ITEM_QUANTITY + 1
            })
        );
        assert_eq!(
            cart.add(&p, i64::MAX),
            Err(CoreError::InvalidQuantity { quantity: i64::MAX })
        );
        assert_eq!(cart.line("1").unwrap().quantity, MAX_ITEM_QUANTITY);
        assert_eq!(cart.line("1").unwrap().line_total().cents(), 11500 * 999);
    }

    #[test]
    fn test_cart_remove_then_add_has_no_residue() {
        let mut cart = Cart::new();
        let p = product("1", 999);
        cart.add(&p, 4).unwrap();

        assert!(cart.remove("1").is_some());
        cart.add(&p, 2).unwrap();

        assert_eq!(cart.line("1").unwrap().quantity, 2);
        assert!(cart.remove("missing").is_none());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&product("1", 999), 2).unwrap();
        cart.add(&product("2", 10), 1).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
    }
}
