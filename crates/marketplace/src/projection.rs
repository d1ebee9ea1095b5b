//! # Cart Projection
//!
//! A live, totals-bearing view of one user's cart, fed by the cart actor's
//! watch channel. Every change delivers the complete cart and the view is
//! rebuilt from scratch; nothing is ever patched incrementally, so a missed
//! intermediate state can never corrupt the totals. If edits outpace the
//! reader the channel coalesces them and the next read sees the newest
//! state.

use crate::cart_actor::CartError;
use crate::model::{Cart, CartView};
use tokio::sync::watch;

/// A subscription to one cart, handed out by
/// [`CartClient::watch`](crate::clients::CartClient::watch).
#[derive(Debug)]
pub struct CartProjection {
    receiver: watch::Receiver<Option<Cart>>,
}

impl CartProjection {
    pub(crate) fn new(receiver: watch::Receiver<Option<Cart>>) -> Self {
        Self { receiver }
    }

    /// The view of the most recently observed cart state.
    pub fn view(&self) -> CartView {
        CartView::rebuild(self.receiver.borrow().as_ref())
    }

    /// Waits for the next cart change and returns the rebuilt view.
    ///
    /// Fails only when the cart actor has shut down.
    pub async fn changed(&mut self) -> Result<CartView, CartError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| CartError::Store("cart subscription closed".to_string()))?;
        Ok(CartView::rebuild(self.receiver.borrow_and_update().as_ref()))
    }
}
