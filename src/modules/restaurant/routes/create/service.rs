use super::types::{request, response};
use crate::{
    modules::{cuisine, restaurant::repository, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !user::repository::is_restaurant_owner(&payload.auth.user) {
        return Err(response::Error::NotARestaurantAccount);
    }

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    cuisine::repository::find_by_id(&ctx.db_conn.pool, payload.body.cuisine_id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateRestaurant)?
        .ok_or(response::Error::CuisineNotFound)?;

    let restaurant = repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            owner_id: payload.auth.user.id,
            name: payload.body.name,
            description: payload.body.description,
            cuisine_id: payload.body.cuisine_id,
            phone: payload.body.phone,
            email: payload.body.email,
            address: payload.body.address,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    tracing::info!("Registered restaurant {}", restaurant.id);

    Ok(response::Success::RestaurantCreated(restaurant))
}
