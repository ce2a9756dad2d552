mod cancel;
mod create;
mod get;
mod list;
mod list_by_restaurant;
mod update_status;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(list::get_router())
        .merge(get::get_router())
        .merge(update_status::get_router())
        .merge(cancel::get_router())
}

pub fn get_restaurant_router() -> Router<Arc<Context>> {
    Router::new().merge(list_by_restaurant::get_router())
}
