//! Cart documents and the derived totals view.
//!
//! A cart is keyed by its owner's [`UserId`]; there is exactly one per user
//! and it springs into existence on first use. Totals are never stored: the
//! [`CartView`] is rebuilt from the full cart on every change.

use super::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tax applied to the cart subtotal, as a percentage.
pub const TAX_RATE_PERCENT: u64 = 19;

/// One product in a cart, with the pricing captured when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub supplier_id: UserId,
    pub name: String,
    pub supplier_name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

/// The product fields a cart line copies at add time. Later catalog edits do
/// not reach back into existing carts.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSnapshot {
    pub product_id: ProductId,
    pub supplier_id: UserId,
    pub name: String,
    pub supplier_name: String,
    pub unit_price: u64,
}

/// A user's cart. Lines are keyed by product so adding the same product
/// twice grows a quantity instead of duplicating a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: UserId,
    pub lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            lines: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Creation payload for a cart. Carts are keyed by caller-chosen user id and
/// start empty, so there is nothing to say.
#[derive(Debug, Clone)]
pub struct CartCreate;

/// Totals derived from a full cart snapshot.
///
/// Always rebuilt from scratch; never patched incrementally. A view built
/// from `None` or an empty cart is the zero view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
    pub item_count: u32,
}

impl CartView {
    /// Recomputes every total from the cart's current lines.
    pub fn rebuild(cart: Option<&Cart>) -> Self {
        let lines: Vec<CartLine> = cart
            .map(|c| c.lines.values().cloned().collect())
            .unwrap_or_default();
        let subtotal: u64 = lines
            .iter()
            .map(|l| l.unit_price * u64::from(l.quantity))
            .sum();
        let tax = subtotal * TAX_RATE_PERCENT / 100;
        let item_count = lines.iter().map(|l| l.quantity).sum();
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
            item_count,
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product: u32, price: u64, qty: u32) -> CartLine {
        CartLine {
            product_id: ProductId(product),
            supplier_id: UserId(9),
            name: format!("item {product}"),
            supplier_name: "Proveedor".to_string(),
            unit_price: price,
            quantity: qty,
        }
    }

    #[test]
    fn view_of_nothing_is_zero() {
        let view = CartView::rebuild(None);
        assert!(view.is_empty());
        assert_eq!(view.subtotal, 0);
        assert_eq!(view.tax, 0);
        assert_eq!(view.total, 0);
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn totals_cover_every_line() {
        let mut cart = Cart::empty(UserId(1));
        cart.lines.insert(ProductId(1), line(1, 1000, 3));
        cart.lines.insert(ProductId(2), line(2, 2000, 1));

        let view = CartView::rebuild(Some(&cart));
        assert_eq!(view.subtotal, 5000);
        assert_eq!(view.tax, 950);
        assert_eq!(view.total, 5950);
        assert_eq!(view.item_count, 4);
        assert_eq!(view.lines.len(), 2);
    }
}
