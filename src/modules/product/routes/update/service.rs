use super::types::{request, response};
use crate::{
    modules::{
        category::service::attach_to_restaurant,
        product::{
            repository,
            service::{find_owned, is_valid_price},
        },
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

    if let Some(price) = &payload.body.price {
        if !is_valid_price(price) {
            return Err(response::Error::InvalidPrice);
        }
    }

    let product = find_owned(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateProduct
    })?;

    let category_id = match payload.body.category {
        Some(category) => Some(
            attach_to_restaurant(&mut tx, product.restaurant_id.clone(), category, None)
                .await
                .map_err(|_| response::Error::FailedToUpdateProduct)?
                .id,
        ),
        None => None,
    };

    let product = repository::update_by_id(
        &mut *tx,
        product.id,
        repository::UpdateProductPayload {
            category_id,
            name: payload.body.name,
            description: payload.body.description,
            price: payload.body.price,
            image_url: payload.body.image_url,
            is_active: payload.body.is_active,
            quantity: payload.body.quantity,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProduct)?
    .ok_or(response::Error::ProductNotFound)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToUpdateProduct
    })?;

    Ok(response::Success::ProductUpdated(product))
}
