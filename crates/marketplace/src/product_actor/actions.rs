/// Domain actions on a product document.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Read the current stock level.
    CheckStock,
    /// Remove up to the given quantity from stock, clamping at zero.
    Deduct(u32),
}

/// Result of a [`ProductAction`], one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    /// The stock remaining after the deduction.
    Deduct(u32),
}
