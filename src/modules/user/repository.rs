use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::str::FromStr;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "CLIENT")]
    Client,
    #[serde(rename = "RESTAURANT")]
    Restaurant,
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Client => String::from("CLIENT"),
            Role::Restaurant => String::from("RESTAURANT"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_ref() {
            "CLIENT" => Ok(Role::Client),
            "RESTAURANT" => Ok(Role::Restaurant),
            _ => Err(format!("'{}' is not a valid Role", s)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: String,
}

pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E>(db: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    match sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, name, email, role, phone, address, password_hash)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email.to_lowercase())
    .bind(payload.role.to_string())
    .bind(payload.phone)
    .bind(payload.address)
    .bind(payload.password_hash)
    .fetch_one(db)
    .await
    {
        Ok(user) => Ok(user),
        Err(err) => {
            tracing::error!("Error occured while creating a user account: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = LOWER($1)")
        .bind(&email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching user with email {}: {}",
                email,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            name = COALESCE($1, name),
            phone = COALESCE($2, phone),
            address = COALESCE($3, address),
            password_hash = COALESCE($4, password_hash),
            updated_at = NOW()
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.phone)
    .bind(payload.address)
    .bind(payload.password_hash)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating user with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub fn is_client(user: &User) -> bool {
    user.role == Role::Client
}

pub fn is_restaurant_owner(user: &User) -> bool {
    user.role == Role::Restaurant
}

#[cfg(test)]
pub mod test {
    use super::*;
    use chrono::Utc;

    pub fn user(email: &str, role: Role) -> User {
        User {
            id: Ulid::new().to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            role,
            phone: None,
            address: None,
            password_hash: String::new(),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_parse_roles_case_insensitively() {
        assert_eq!("client".parse::<Role>(), Ok(Role::Client));
        assert_eq!("RESTAURANT".parse::<Role>(), Ok(Role::Restaurant));
        assert!("ADMIN".parse::<Role>().is_err());
    }

    #[test]
    fn should_reject_unknown_stored_roles_without_panicking() {
        assert_eq!(Role::try_from("RESTAURANT".to_string()), Ok(Role::Restaurant));
        assert!(Role::try_from("ADMIN".to_string()).is_err());
    }

    #[test]
    fn should_not_serialize_password_hash() {
        let mut user = user("jane@example.com", Role::Client);
        user.password_hash = "secret-hash".to_string();

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "CLIENT");
    }

    #[test]
    fn should_check_roles() {
        assert!(is_client(&user("a@example.com", Role::Client)));
        assert!(!is_client(&user("b@example.com", Role::Restaurant)));
        assert!(is_restaurant_owner(&user("c@example.com", Role::Restaurant)));
    }
}
