use super::types::{request, response};
use crate::{
    modules::{restaurant, review::repository, user::repository::is_client},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !is_client(&payload.auth.user) {
        return Err(response::Error::NotAClient);
    }

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToCreateReview)?
            .ok_or(response::Error::RestaurantNotFound)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateReviewPayload {
            restaurant_id: restaurant.id,
            user_id: payload.auth.user.id,
            score: payload.body.score,
            comments: payload.body.comments,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateReview)
    .map(response::Success::ReviewCreated)
}
