use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate};
use async_trait::async_trait;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    fn from_create(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            supplier_id: params.supplier_id,
            supplier_name: params.supplier_name,
            name: params.name,
            unit_price: params.unit_price,
            stock: params.stock,
            active: true,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::ForSupplier(supplier_id) => self.supplier_id == *supplier_id,
            ProductFilter::Active => self.active,
        }
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(unit_price) = update.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::Deduct(quantity) => {
                // Oversold demand drains stock to zero rather than failing.
                self.stock = self.stock.saturating_sub(quantity);
                Ok(ProductActionResult::Deduct(self.stock))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn product(stock: u32) -> Product {
        Product::from_create(
            ProductId(1),
            ProductCreate {
                supplier_id: UserId(9),
                supplier_name: "Distribuidora Sur".to_string(),
                name: "Harina 1kg".to_string(),
                unit_price: 1200,
                stock,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn deduct_clamps_at_zero() {
        let mut p = product(3);
        let result = p.handle_action(ProductAction::Deduct(5), &()).await.unwrap();
        assert_eq!(result, ProductActionResult::Deduct(0));
        assert_eq!(p.stock, 0);
    }

    #[tokio::test]
    async fn deduct_returns_remaining_stock() {
        let mut p = product(10);
        let result = p.handle_action(ProductAction::Deduct(4), &()).await.unwrap();
        assert_eq!(result, ProductActionResult::Deduct(6));
    }

    #[test]
    fn new_products_are_active() {
        assert!(product(1).active);
    }
}
