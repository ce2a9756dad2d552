use super::types::{request, response};
use crate::{
    modules::review::{repository, service::find_authored},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let review = find_authored(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        review.id,
        repository::UpdateReviewPayload {
            score: payload.body.score,
            comments: payload.body.comments,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateReview)?
    .ok_or(response::Error::ReviewNotFound)
    .map(response::Success::ReviewUpdated)
}
