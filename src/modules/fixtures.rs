//! Rows inserted through the repositories for database tests. Every name and
//! email carries a fresh ulid so tests can share one database.

use crate::{
    modules::{
        auth::middleware::Auth,
        category,
        order::repository::{self as order_repository, FullOrder, OrderStatus},
        product::repository::{self as product_repository, Product},
        restaurant::repository::{self as restaurant_repository, Restaurant},
        user::repository::{self as user_repository, Role, User},
    },
    types::Context,
};
use sqlx::types::BigDecimal;
use std::str::FromStr;
use ulid::Ulid;

pub const ITALIAN_CUISINE_ID: &str = "01J9Z0C0000000000000000001";

pub fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, Ulid::new())
}

pub fn auth(user: &User) -> Auth {
    Auth { user: user.clone() }
}

pub async fn user(ctx: &Context, role: Role) -> User {
    user_repository::create(
        &ctx.db_conn.pool,
        user_repository::CreateUserPayload {
            name: "Test User".to_string(),
            email: format!("{}@example.com", Ulid::new().to_string().to_lowercase()),
            role,
            phone: None,
            address: None,
            password_hash: String::new(),
        },
    )
    .await
    .unwrap()
}

pub async fn restaurant(ctx: &Context, owner: &User) -> Restaurant {
    restaurant_repository::create(
        &ctx.db_conn.pool,
        restaurant_repository::CreateRestaurantPayload {
            owner_id: owner.id.clone(),
            name: unique("Trattoria"),
            description: None,
            cuisine_id: ITALIAN_CUISINE_ID.to_string(),
            phone: None,
            email: None,
            address: None,
        },
    )
    .await
    .unwrap()
}

/// Creates a product in `category_name`, attaching the category to the restaurant.
pub async fn product(
    ctx: &Context,
    restaurant: &Restaurant,
    category_name: &str,
    price: &str,
) -> Product {
    let mut conn = ctx.db_conn.pool.acquire().await.unwrap();
    let category = category::service::attach_to_restaurant(
        &mut conn,
        restaurant.id.clone(),
        category_name.to_string(),
        None,
    )
    .await
    .unwrap();

    product_repository::create(
        &mut *conn,
        product_repository::CreateProductPayload {
            restaurant_id: restaurant.id.clone(),
            category_id: category.id,
            name: unique("Pizza"),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            image_url: None,
            is_active: true,
            quantity: 10,
        },
    )
    .await
    .unwrap()
}

/// A single-line order for `product`, moved to `status` when it is not pending.
pub async fn order(ctx: &Context, client: &User, product: &Product, status: OrderStatus) -> FullOrder {
    let mut conn = ctx.db_conn.pool.acquire().await.unwrap();
    let mut order = order_repository::create(
        &mut conn,
        order_repository::CreateOrderPayload {
            client_id: client.id.clone(),
            restaurant_id: product.restaurant_id.clone(),
            total: product.price.clone(),
            comments: None,
            details: vec![order_repository::CreateOrderDetailPayload {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: 1,
                subtotal: product.price.clone(),
            }],
        },
    )
    .await
    .unwrap();

    if status != OrderStatus::Pending {
        assert!(order_repository::update_status(
            &mut *conn,
            order.order.id.clone(),
            OrderStatus::Pending,
            status.clone(),
        )
        .await
        .unwrap());
        order.order.status = status;
    }

    order
}
