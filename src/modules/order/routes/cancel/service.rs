use super::types::{request, response};
use crate::{
    modules::order::{
        repository::{self, OrderStatus},
        service::{can_cancel, is_client_of, is_restaurant_owner_of},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToCancelOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    if !is_client_of(&order, &payload.auth) && !is_restaurant_owner_of(&order, &payload.auth) {
        return Err(response::Error::NotOrderOwner);
    }

    if !can_cancel(&order) {
        return Err(response::Error::OrderNotPending);
    }

    match repository::update_status(
        &ctx.db_conn.pool,
        order.id,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    )
    .await
    {
        Ok(true) => Ok(response::Success::OrderCancelled),
        Ok(false) => Err(response::Error::OrderNotPending),
        Err(_) => Err(response::Error::FailedToCancelOrder),
    }
}
