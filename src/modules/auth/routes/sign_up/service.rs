use super::types::{request, response};
use crate::{
    modules::{
        auth::service::{password, token},
        user::{self, repository::Role},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let role = payload
        .role
        .parse::<Role>()
        .map_err(|_| response::Error::InvalidRole)?;

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::UnexpectedError)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if user::repository::find_by_email(&mut *tx, payload.email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            name: payload.name,
            email: payload.email,
            role,
            phone: payload.phone,
            address: payload.address,
            password_hash,
        },
    )
    .await
    .map_err(|_| response::Error::SignupFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!("Registered user {} as {}", user.id, user.role.to_string());

    token::issue(&ctx.auth, &user)
        .map(|token| response::Success::SignedUp(user, token))
        .map_err(|_| response::Error::UnexpectedError)
}
