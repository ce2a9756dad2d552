mod create;
mod delete;
mod list_by_restaurant;
mod mine;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(mine::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
}

pub fn get_restaurant_router() -> Router<Arc<Context>> {
    Router::new().merge(list_by_restaurant::get_router())
}
