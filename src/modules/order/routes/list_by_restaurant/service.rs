use super::types::{request, response};
use crate::{
    modules::{order::repository, restaurant::service::find_owned},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = find_owned(&ctx.db_conn.pool, payload.restaurant_id, &payload.auth).await?;

    repository::find_many(
        &ctx.db_conn.pool,
        repository::Scope::Restaurant(restaurant.id),
        payload.pagination,
        payload.filters,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchOrders)
    .map(response::Success::Orders)
}
