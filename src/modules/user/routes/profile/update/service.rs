use super::types::{request, response};
use crate::{
    modules::{auth::service::password, user::repository},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let password_hash = payload
        .body
        .password
        .as_deref()
        .map(password::hash)
        .transpose()
        .map_err(|_| response::Error::FailedToUpdateProfile)?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        payload.auth.user.id,
        repository::UpdateUserPayload {
            name: payload.body.name,
            phone: payload.body.phone,
            address: payload.body.address,
            password_hash,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateProfile)?
    .ok_or(response::Error::UserNotFound)
    .map(response::Success::ProfileUpdated)
}
