use super::service;
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http::request::Parts, response::Response};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

enum Error {
    InvalidSession,
    ExpiredSession,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid session token" })),
            )
                .into_response(),
            Self::ExpiredSession => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Session token expired" })),
            )
                .into_response(),
        }
    }
}

async fn get_user_from_token(ctx: Arc<Context>, token: &str) -> Result<User, Error> {
    let claims = service::token::verify(&ctx.auth, token).map_err(|err| match err {
        service::token::Error::ExpiredToken => Error::ExpiredSession,
        _ => Error::InvalidSession,
    })?;

    user::repository::find_by_id(&ctx.db_conn.pool, claims.sub)
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)
}

/// The authenticated principal for the current request.
#[derive(Serialize, Clone, Debug)]
pub struct Auth {
    pub user: User,
}

impl Auth {
    /// Ownership is decided by email, the identity carried in the token.
    pub fn is(&self, email: &str) -> bool {
        self.user.email.eq_ignore_ascii_case(email)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Application context missing from request: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidSession.into_response())?;

        get_user_from_token(ctx, bearer.token())
            .await
            .map(|user| Self { user })
            .map_err(IntoResponse::into_response)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::user::repository::{test::user, Role};

    #[test]
    fn should_match_principal_by_email() {
        let auth = Auth {
            user: user("Owner@Example.com", Role::Restaurant),
        };

        assert!(auth.is("owner@example.com"));
        assert!(!auth.is("someone@example.com"));
    }
}
