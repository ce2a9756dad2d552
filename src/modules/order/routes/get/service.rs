use super::types::{request, response};
use crate::{
    modules::order::{
        repository,
        service::{is_client_of, is_restaurant_owner_of},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_full_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if !is_client_of(&order.order, &payload.auth)
        && !is_restaurant_owner_of(&order.order, &payload.auth)
    {
        return Err(response::Error::NotOrderOwner);
    }

    Ok(response::Success::Order(order))
}
