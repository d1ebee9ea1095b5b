use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Filter = OrderFilter;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.quantity == 0 {
            return Err(OrderError::InvalidQuantity(params.quantity));
        }
        Ok(Order::pending(id, params, Utc::now()))
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::ForSupplier(supplier_id) => self.supplier_id == *supplier_id,
            OrderFilter::ForBuyer(buyer_id) => self.buyer_id == *buyer_id,
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &ProductClient) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        products: &ProductClient,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Confirm => {
                if self.status == OrderStatus::Confirmed {
                    return Err(OrderError::AlreadyConfirmed(self.id));
                }

                // Deduct first; the order only flips to confirmed once the
                // stock write has succeeded.
                let remaining = products
                    .deduct_stock(self.product_id, self.quantity)
                    .await
                    .map_err(|e| match e {
                        ProductError::NotFound(id) => OrderError::ProductMissing(id),
                        ProductError::Store(msg) => OrderError::Store(msg),
                    })?;

                self.status = OrderStatus::Confirmed;
                self.supplier_confirmation = OrderStatus::Confirmed;
                Ok(OrderActionResult::Confirm(remaining))
            }
        }
    }
}
