use crate::model::{LineSnapshot, ProductId};

/// Edits applied to one user's cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a product. If the product is already in the cart its
    /// quantity grows by one; the stored snapshot keeps the pricing from the
    /// first add.
    Add(LineSnapshot),
    /// Set an existing line to an exact quantity. Zero is rejected; use
    /// [`CartAction::Remove`] instead.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Drop a line. Removing a product that is not in the cart is a no-op.
    Remove(ProductId),
    /// Empty the cart in one step.
    Clear,
}

/// Result of a [`CartAction`], one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The line's quantity after the add.
    Add(u32),
    SetQuantity(()),
    Remove(()),
    Clear(()),
}
