//! Cart editing and checkout against a full running system.

use marketplace::clients::CheckoutError;
use marketplace::lifecycle::Marketplace;
use marketplace::model::{
    LineSnapshot, OrderStatus, ProductCreate, ProductId, UserCreate, UserId,
};
use marketplace::cart_actor::CartError;
use store_actor::EntityClient;

async fn register_pair(system: &Marketplace) -> (UserId, UserId) {
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

async fn list_product(
    system: &Marketplace,
    supplier: UserId,
    name: &str,
    unit_price: u64,
    stock: u32,
) -> ProductId {
    system
        .products
        .create_product(ProductCreate {
            supplier_id: supplier,
            supplier_name: "Distribuidora Sur".to_string(),
            name: name.to_string(),
            unit_price,
            stock,
        })
        .await
        .unwrap()
}

fn snapshot_of(product: ProductId, supplier: UserId, name: &str, unit_price: u64) -> LineSnapshot {
    LineSnapshot {
        product_id: product,
        supplier_id: supplier,
        name: name.to_string(),
        supplier_name: "Distribuidora Sur".to_string(),
        unit_price,
    }
}

#[tokio::test]
async fn checkout_of_empty_cart_is_rejected() {
    let system = Marketplace::new();
    let (_, buyer) = register_pair(&system).await;

    let err = system.checkout.checkout(buyer).await.unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn cart_totals_follow_the_worked_example() {
    let system = Marketplace::new();
    let (supplier, buyer) = register_pair(&system).await;
    let flour = list_product(&system, supplier, "Harina 1kg", 1000, 50).await;
    let oil = list_product(&system, supplier, "Aceite 1L", 2000, 50).await;

    // Three units of the first product, one of the second.
    for _ in 0..3 {
        system
            .carts
            .add_line(buyer, snapshot_of(flour, supplier, "Harina 1kg", 1000))
            .await
            .unwrap();
    }
    system
        .carts
        .add_line(buyer, snapshot_of(oil, supplier, "Aceite 1L", 2000))
        .await
        .unwrap();

    let view = system.carts.snapshot(buyer).await.unwrap();
    assert_eq!(view.subtotal, 5000);
    assert_eq!(view.tax, 950);
    assert_eq!(view.total, 5950);
    assert_eq!(view.item_count, 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn checkout_creates_one_order_per_line_and_clears_the_cart() {
    let system = Marketplace::new();
    let (supplier, buyer) = register_pair(&system).await;
    let flour = list_product(&system, supplier, "Harina 1kg", 1000, 50).await;
    let oil = list_product(&system, supplier, "Aceite 1L", 2000, 50).await;

    for _ in 0..3 {
        system
            .carts
            .add_line(buyer, snapshot_of(flour, supplier, "Harina 1kg", 1000))
            .await
            .unwrap();
    }
    system
        .carts
        .add_line(buyer, snapshot_of(oil, supplier, "Aceite 1L", 2000))
        .await
        .unwrap();

    let order_ids = system.checkout.checkout(buyer).await.unwrap();
    assert_eq!(order_ids.len(), 2);

    let orders = system.orders.list_for_buyer(buyer).await.unwrap();
    assert_eq!(orders.len(), 2);
    let mut subtotals: Vec<u64> = orders.iter().map(|o| o.subtotal).collect();
    subtotals.sort();
    assert_eq!(subtotals, vec![2000, 3000]);
    assert!(orders.iter().all(|o| o.status == OrderStatus::Pending));
    assert!(orders
        .iter()
        .all(|o| o.supplier_confirmation == OrderStatus::Pending));
    assert!(orders.iter().all(|o| o.buyer_name == "Almacén Central"));

    // Checkout does not touch stock.
    assert_eq!(system.products.check_stock(flour).await.unwrap(), 50);

    let view = system.carts.snapshot(buyer).await.unwrap();
    assert!(view.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn buyer_name_falls_back_to_email() {
    let system = Marketplace::new();
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
            name: String::new(),
            email: "anon@central.cl".to_string(),
        })
        .await
        .unwrap();
    let product = list_product(&system, supplier, "Harina 1kg", 1000, 10).await;

    system
        .carts
        .add_line(buyer, snapshot_of(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();
    let order_ids = system.checkout.checkout(buyer).await.unwrap();

    let order = system.orders.get(order_ids[0]).await.unwrap().unwrap();
    assert_eq!(order.buyer_name, "anon@central.cl");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn adding_the_same_product_twice_grows_one_line() {
    let system = Marketplace::new();
    let (supplier, buyer) = register_pair(&system).await;
    let product = list_product(&system, supplier, "Harina 1kg", 1000, 10).await;

    let q1 = system
        .carts
        .add_line(buyer, snapshot_of(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();
    let q2 = system
        .carts
        .add_line(buyer, snapshot_of(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();
    assert_eq!((q1, q2), (1, 2));

    let view = system.carts.snapshot(buyer).await.unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.item_count, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn setting_quantity_to_zero_is_rejected() {
    let system = Marketplace::new();
    let (supplier, buyer) = register_pair(&system).await;
    let product = list_product(&system, supplier, "Harina 1kg", 1000, 10).await;

    system
        .carts
        .add_line(buyer, snapshot_of(product, supplier, "Harina 1kg", 1000))
        .await
        .unwrap();

    let err = system
        .carts
        .set_quantity(buyer, product, 0)
        .await
        .unwrap_err();
    assert_eq!(err, CartError::InvalidQuantity(0));

    // The line is untouched.
    let view = system.carts.snapshot(buyer).await.unwrap();
    assert_eq!(view.item_count, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_line_voids_the_entire_batch() {
    let system = Marketplace::new();
    let (supplier, buyer) = register_pair(&system).await;

    use marketplace::model::OrderCreate;
    let good = OrderCreate {
        buyer_id: buyer,
        buyer_name: "Almacén Central".to_string(),
        product_id: ProductId(1),
        product_name: "Harina 1kg".to_string(),
        supplier_id: supplier,
        supplier_name: "Distribuidora Sur".to_string(),
        quantity: 2,
        unit_price: 1000,
    };
    let bad = OrderCreate {
        quantity: 0,
        ..good.clone()
    };

    let err = system
        .orders
        .create_batch(vec![good, bad])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        marketplace::order_actor::OrderError::InvalidQuantity(0)
    );

    // Nothing was inserted, not even the valid first order.
    let orders = system.orders.list_for_buyer(buyer).await.unwrap();
    assert!(orders.is_empty());

    system.shutdown().await.unwrap();
}
