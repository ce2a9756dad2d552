mod catalog;
mod create;
mod delete;
mod get;
mod menu;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(catalog::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
}

/// Routes mounted under `/restaurants`.
pub fn get_restaurant_router() -> Router<Arc<Context>> {
    Router::new().merge(menu::get_router())
}
