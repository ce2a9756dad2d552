use super::types::{request, response};
use crate::{
    modules::{category::service::attach_to_restaurant, restaurant::service::find_owned},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = find_owned(&ctx.db_conn.pool, payload.restaurant_id, &payload.auth).await?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToAttachCategory
    })?;

    let category = attach_to_restaurant(
        &mut tx,
        restaurant.id,
        payload.body.name,
        payload.body.description,
    )
    .await
    .map_err(|_| response::Error::FailedToAttachCategory)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToAttachCategory
    })?;

    Ok(response::Success::CategoryAttached(category))
}
