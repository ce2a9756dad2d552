use super::types::{request, response};
use crate::{
    modules::{
        category::service::attach_to_restaurant,
        product::{repository, service::is_valid_price},
        restaurant::service::find_owned,
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

    if !is_valid_price(&payload.body.price) {
        return Err(response::Error::InvalidPrice);
    }

    let restaurant = find_owned(
        &ctx.db_conn.pool,
        payload.body.restaurant_id.clone(),
        &payload.auth,
    )
    .await?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateProduct
    })?;

    let category = attach_to_restaurant(
        &mut tx,
        restaurant.id.clone(),
        payload.body.category,
        payload.body.category_description,
    )
    .await
    .map_err(|_| response::Error::FailedToCreateProduct)?;

    let product = repository::create(
        &mut *tx,
        repository::CreateProductPayload {
            restaurant_id: restaurant.id,
            category_id: category.id,
            name: payload.body.name,
            description: payload.body.description,
            price: payload.body.price,
            image_url: payload.body.image_url,
            is_active: payload.body.is_active,
            quantity: payload.body.quantity,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateProduct)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateProduct
    })?;

    Ok(response::Success::ProductCreated(product))
}
