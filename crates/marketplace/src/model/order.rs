use super::{OrderId, ProductId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an order sits in its lifecycle. The transition is one-way:
/// pending orders can be confirmed, confirmed orders never go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
}

/// One purchased line, denormalized so the document reads standalone:
/// buyer and supplier names, product name and the price are all copied in
/// at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub supplier_id: UserId,
    pub supplier_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub supplier_confirmation: OrderStatus,
}

impl Order {
    /// Builds a fresh pending order. `created_at` is assigned by the store,
    /// not the caller, so timestamps within a batch agree.
    pub fn pending(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        let subtotal = params.unit_price * u64::from(params.quantity);
        Self {
            id,
            buyer_id: params.buyer_id,
            buyer_name: params.buyer_name,
            product_id: params.product_id,
            product_name: params.product_name,
            supplier_id: params.supplier_id,
            supplier_name: params.supplier_name,
            quantity: params.quantity,
            unit_price: params.unit_price,
            subtotal,
            created_at,
            status: OrderStatus::Pending,
            supplier_confirmation: OrderStatus::Pending,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub buyer_id: UserId,
    pub buyer_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub supplier_id: UserId,
    pub supplier_name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Orders awaiting or handled by one supplier.
    ForSupplier(UserId),
    /// A buyer's purchase history.
    ForBuyer(UserId),
}
