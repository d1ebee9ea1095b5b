//! Whole-system flows: live cart projections, supplier views and the
//! shutdown sequence.

use marketplace::lifecycle::Marketplace;
use marketplace::model::{LineSnapshot, ProductCreate, ProductId, UserCreate, UserId};

async fn seed_supplier_and_buyer(system: &Marketplace) -> (UserId, UserId) {
    let supplier = system
        .users
        .create_user(UserCreate {
            name: "Distribuidora Sur".to_string(),
            email: "ventas@sur.cl".to_string(),
        })
        .await
        .unwrap();
    let buyer = system
        .users
        .create_user(UserCreate {
            name: "Almacén Central".to_string(),
            email: "compras@central.cl".to_string(),
        })
        .await
        .unwrap();
    (supplier, buyer)
}

fn line(product: ProductId, supplier: UserId, name: &str, price: u64) -> LineSnapshot {
    LineSnapshot {
        product_id: product,
        supplier_id: supplier,
        name: name.to_string(),
        supplier_name: "Distribuidora Sur".to_string(),
        unit_price: price,
    }
}

#[tokio::test]
async fn projection_rebuilds_totals_on_every_edit() {
    let system = Marketplace::new();
    let (supplier, buyer) = seed_supplier_and_buyer(&system).await;
    let product = system
        .products
        .create_product(ProductCreate {
            supplier_id: supplier,
            supplier_name: "Distribuidora Sur".to_string(),
            name: "Harina 1kg".to_string(),
            unit_price: 1000,
            stock: 10,
        })
        .await
        .unwrap();

    let mut projection = system.carts.watch(buyer).await.unwrap();
    assert!(projection.view().is_empty());

    system
        .carts
        .add_line(buyer, line(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();
    let view = projection.changed().await.unwrap();
    assert_eq!(view.subtotal, 1000);
    assert_eq!(view.item_count, 1);

    system
        .carts
        .set_quantity(buyer, product, 5)
        .await
        .unwrap();
    let view = projection.changed().await.unwrap();
    assert_eq!(view.subtotal, 5000);
    assert_eq!(view.tax, 950);
    assert_eq!(view.total, 5950);

    system.carts.clear(buyer).await.unwrap();
    let view = projection.changed().await.unwrap();
    assert!(view.is_empty());
    assert_eq!(view.total, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn two_subscribers_see_the_same_cart() {
    let system = Marketplace::new();
    let (supplier, buyer) = seed_supplier_and_buyer(&system).await;
    let product = system
        .products
        .create_product(ProductCreate {
            supplier_id: supplier,
            supplier_name: "Distribuidora Sur".to_string(),
            name: "Harina 1kg".to_string(),
            unit_price: 1000,
            stock: 10,
        })
        .await
        .unwrap();

    // The same user's cart open on two devices.
    let mut phone = system.carts.watch(buyer).await.unwrap();
    let mut laptop = system.carts.watch(buyer).await.unwrap();

    system
        .carts
        .add_line(buyer, line(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();

    let phone_view = phone.changed().await.unwrap();
    let laptop_view = laptop.changed().await.unwrap();
    assert_eq!(phone_view, laptop_view);
    assert_eq!(phone_view.item_count, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn supplier_sees_their_catalog_and_incoming_orders() {
    let system = Marketplace::new();
    let (supplier, buyer) = seed_supplier_and_buyer(&system).await;
    let other_supplier = system
        .users
        .create_user(UserCreate {
            name: "Otro Proveedor".to_string(),
            email: "otro@proveedor.cl".to_string(),
        })
        .await
        .unwrap();

    let flour = system
        .products
        .create_product(ProductCreate {
            supplier_id: supplier,
            supplier_name: "Distribuidora Sur".to_string(),
            name: "Harina 1kg".to_string(),
            unit_price: 1000,
            stock: 10,
        })
        .await
        .unwrap();
    system
        .products
        .create_product(ProductCreate {
            supplier_id: other_supplier,
            supplier_name: "Otro Proveedor".to_string(),
            name: "Azúcar 1kg".to_string(),
            unit_price: 900,
            stock: 10,
        })
        .await
        .unwrap();

    let mine = system.products.list_for_supplier(supplier).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Harina 1kg");

    // Deactivated listings leave the buyer-facing catalog but not the
    // supplier's own list.
    system
        .products
        .update_product(
            flour,
            marketplace::model::ProductUpdate {
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let active = system.products.list_active().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Azúcar 1kg");
    assert_eq!(
        system
            .products
            .list_for_supplier(supplier)
            .await
            .unwrap()
            .len(),
        1
    );

    system
        .carts
        .add_line(buyer, line(flour, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();
    system.checkout.checkout(buyer).await.unwrap();

    let incoming = system.orders.list_for_supplier(supplier).await.unwrap();
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].supplier_name, "Distribuidora Sur");
    assert!(system
        .orders
        .list_for_supplier(other_supplier)
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn untouched_cart_reads_as_the_zero_view() {
    let system = Marketplace::new();
    let (_, buyer) = seed_supplier_and_buyer(&system).await;

    let view = system.carts.snapshot(buyer).await.unwrap();
    assert!(view.is_empty());
    assert_eq!(view.subtotal, 0);
    assert_eq!(view.total, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn shutdown_stops_every_actor() {
    let system = Marketplace::new();
    let (supplier, _) = seed_supplier_and_buyer(&system).await;
    system
        .products
        .create_product(ProductCreate {
            supplier_id: supplier,
            supplier_name: "Distribuidora Sur".to_string(),
            name: "Harina 1kg".to_string(),
            unit_price: 1000,
            stock: 10,
        })
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}
