use super::{ProductId, UserId};
use serde::{Deserialize, Serialize};

/// A catalog listing. Prices are integer amounts in the smallest currency
/// unit; stock never goes below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub supplier_id: UserId,
    pub supplier_name: String,
    pub name: String,
    pub unit_price: u64,
    pub stock: u32,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub supplier_id: UserId,
    pub supplier_name: String,
    pub name: String,
    pub unit_price: u64,
    pub stock: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub unit_price: Option<u64>,
    pub stock: Option<u32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum ProductFilter {
    /// Every listing owned by one supplier, active or not.
    ForSupplier(UserId),
    /// Listings currently visible to buyers.
    Active,
}
