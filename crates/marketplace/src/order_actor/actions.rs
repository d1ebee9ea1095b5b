/// Domain actions on an order document.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Supplier accepts the order: deduct the ordered quantity from the
    /// product's stock and mark the order confirmed. At most once per order.
    Confirm,
}

/// Result of an [`OrderAction`], one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The product stock remaining after the deduction.
    Confirm(u32),
}
