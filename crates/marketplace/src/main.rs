//! Demo binary: runs one full cart-to-order flow against a live system.
//!
//! Run with `RUST_LOG=info cargo run -p marketplace` for compact logs, or
//! `RUST_LOG=debug` to see every request payload.

use marketplace::lifecycle::Marketplace;
use marketplace::model::{LineSnapshot, ProductCreate, UserCreate};
use store_actor::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting marketplace demo");

    let system = Marketplace::new();

    let supplier_id = system
        .users
        .create_user(UserCreate {
            name: "Distribuidora Sur".to_string(),
            email: "ventas@sur.cl".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%supplier_id, "Supplier registered");

    let buyer_id = system
        .users
        .create_user(UserCreate {
            name: "Almacén Central".to_string(),
            email: "compras@central.cl".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%buyer_id, "Buyer registered");

    let product_id = system
        .products
        .create_product(ProductCreate {
            supplier_id,
            supplier_name: "Distribuidora Sur".to_string(),
            name: "Harina 1kg".to_string(),
            unit_price: 1200,
            stock: 40,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%product_id, "Product listed");

    let span = tracing::info_span!("cart_editing");
    let view = async {
        let line = LineSnapshot {
            product_id,
            supplier_id,
            name: "Harina 1kg".to_string(),
            supplier_name: "Distribuidora Sur".to_string(),
            unit_price: 1200,
        };
        system
            .carts
            .add_line(buyer_id, line)
            .await
            .map_err(|e| e.to_string())?;
        system
            .carts
            .set_quantity(buyer_id, product_id, 3)
            .await
            .map_err(|e| e.to_string())?;
        system
            .carts
            .snapshot(buyer_id)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(
        subtotal = view.subtotal,
        tax = view.tax,
        total = view.total,
        "Cart ready"
    );

    let span = tracing::info_span!("checkout");
    let order_ids = async {
        system
            .checkout
            .checkout(buyer_id)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(count = order_ids.len(), "Orders placed");

    for order_id in &order_ids {
        match system.orders.confirm(*order_id).await {
            Ok(remaining) => info!(%order_id, remaining, "Order confirmed"),
            Err(e) => error!(%order_id, error = %e, "Confirmation failed"),
        }
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
