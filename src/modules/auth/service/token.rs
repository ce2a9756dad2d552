use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{
    modules::user::repository::{Role, User},
    types::AuthContext,
};

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidToken,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

/// Claims carried by every bearer token.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Serialize, Clone, Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

pub fn issue(ctx: &AuthContext, user: &User) -> Result<IssuedToken> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ctx.jwt_expires_in)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(ctx.jwt_secret.as_bytes()),
    )
    .map(|access_token| IssuedToken {
        access_token,
        token_type: "Bearer",
        expires_in: ctx.jwt_expires_in,
    })
    .map_err(|err| {
        tracing::error!("Failed to sign access token for user {}: {}", user.id, err);
        Error::UnexpectedError
    })
}

pub fn verify(ctx: &AuthContext, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(ctx.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => {
            tracing::debug!("Rejected access token: {}", err);
            Error::InvalidToken
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::user::repository::test::user;

    fn auth_context(secret: &str) -> AuthContext {
        AuthContext {
            jwt_secret: secret.to_string(),
            jwt_expires_in: 3600,
        }
    }

    #[test]
    fn should_issue_and_verify_token() {
        let ctx = auth_context("secret");
        let owner = user("owner@example.com", Role::Restaurant);

        let issued = issue(&ctx, &owner).unwrap();
        let claims = verify(&ctx, &issued.access_token).unwrap();

        assert_eq!(claims.sub, owner.id);
        assert_eq!(claims.email, "owner@example.com");
        assert_eq!(claims.role, Role::Restaurant);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(issued.token_type, "Bearer");
    }

    #[test]
    fn should_reject_token_signed_with_another_secret() {
        let issued = issue(
            &auth_context("secret"),
            &user("client@example.com", Role::Client),
        )
        .unwrap();

        assert!(matches!(
            verify(&auth_context("other"), &issued.access_token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn should_reject_expired_token() {
        let ctx = AuthContext {
            jwt_secret: "secret".to_string(),
            jwt_expires_in: -3600,
        };
        let issued = issue(&ctx, &user("client@example.com", Role::Client)).unwrap();

        assert!(matches!(
            verify(&ctx, &issued.access_token),
            Err(Error::ExpiredToken)
        ));
    }

    #[test]
    fn should_reject_garbage() {
        assert!(matches!(
            verify(&auth_context("secret"), "not-a-jwt"),
            Err(Error::InvalidToken)
        ));
    }
}
