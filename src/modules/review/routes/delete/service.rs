use super::types::{request, response};
use crate::{
    modules::review::{repository, service::find_authored},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let review = find_authored(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    match repository::delete_by_id(&ctx.db_conn.pool, review.id).await {
        Ok(true) => Ok(response::Success::ReviewDeleted),
        Ok(false) => Err(response::Error::ReviewNotFound),
        Err(_) => Err(response::Error::FailedToDeleteReview),
    }
}
