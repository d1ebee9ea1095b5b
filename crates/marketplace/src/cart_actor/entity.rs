use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{Cart, CartCreate, CartLine, UserId};
use async_trait::async_trait;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for Cart {
    type Id = UserId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Filter = ();
    type Context = ();
    type Error = CartError;

    fn from_create(id: UserId, _params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::empty(id))
    }

    /// A missing cart is an empty cart. The first action against a user id
    /// materializes it.
    fn on_missing(id: &UserId) -> Option<Self> {
        Some(Cart::empty(*id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &(),
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add(snapshot) => {
                let line = self
                    .lines
                    .entry(snapshot.product_id)
                    .and_modify(|l| l.quantity += 1)
                    .or_insert(CartLine {
                        product_id: snapshot.product_id,
                        supplier_id: snapshot.supplier_id,
                        name: snapshot.name,
                        supplier_name: snapshot.supplier_name,
                        unit_price: snapshot.unit_price,
                        quantity: 1,
                    });
                Ok(CartActionResult::Add(line.quantity))
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => {
                if quantity == 0 {
                    return Err(CartError::InvalidQuantity(quantity));
                }
                match self.lines.get_mut(&product_id) {
                    Some(line) => {
                        line.quantity = quantity;
                        Ok(CartActionResult::SetQuantity(()))
                    }
                    None => Err(CartError::LineNotFound(product_id)),
                }
            }
            CartAction::Remove(product_id) => {
                self.lines.remove(&product_id);
                Ok(CartActionResult::Remove(()))
            }
            CartAction::Clear => {
                self.lines.clear();
                Ok(CartActionResult::Clear(()))
            }
        }
    }
}
