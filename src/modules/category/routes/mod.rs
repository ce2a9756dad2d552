mod attach;
mod detach;
mod list;
mod list_by_restaurant;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().merge(list::get_router())
}

/// Routes mounted under `/restaurants`.
pub fn get_restaurant_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list_by_restaurant::get_router())
        .merge(attach::get_router())
        .merge(detach::get_router())
}
