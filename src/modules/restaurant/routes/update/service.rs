use super::types::{request, response};
use crate::{
    modules::{
        cuisine,
        restaurant::{repository, service::find_owned},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant = find_owned(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    if let Some(cuisine_id) = payload.body.cuisine_id.clone() {
        cuisine::repository::find_by_id(&ctx.db_conn.pool, cuisine_id)
            .await
            .map_err(|_| response::Error::FailedToUpdateRestaurant)?
            .ok_or(response::Error::CuisineNotFound)?;
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        restaurant.id,
        repository::UpdateRestaurantPayload {
            name: payload.body.name,
            description: payload.body.description,
            cuisine_id: payload.body.cuisine_id,
            phone: payload.body.phone,
            email: payload.body.email,
            address: payload.body.address,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateRestaurant)?
    .ok_or(response::Error::RestaurantNotFound)
    .map(response::Success::RestaurantUpdated)
}
