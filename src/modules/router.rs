use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{auth, category, cuisine, order, product, restaurant, review, user};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the Restaurant Marketplace API" })),
    )
}

fn get_restaurants_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(restaurant::routes::get_router())
        .merge(category::routes::get_restaurant_router())
        .merge(product::routes::get_restaurant_router())
        .merge(order::routes::get_restaurant_router())
        .merge(review::routes::get_restaurant_router())
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::routes::get_router())
        .nest("/users", user::routes::get_router())
        .nest("/cuisines", cuisine::routes::get_router())
        .nest("/restaurants", get_restaurants_router())
        .nest("/categories", category::routes::get_router())
        .nest("/products", product::routes::get_router())
        .nest("/orders", order::routes::get_router())
        .nest("/reviews", review::routes::get_router())
}
