use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub user_id: String,
    #[serde(skip_serializing, default)]
    pub user_email: String,
    pub user_name: String,
    pub score: i32,
    pub comments: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateReviewPayload {
    pub restaurant_id: String,
    pub user_id: String,
    pub score: i32,
    pub comments: Option<String>,
}

pub struct UpdateReviewPayload {
    pub score: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_REVIEWS: &str = "
    SELECT
        reviews.*,
        users.email AS user_email,
        users.name AS user_name
    FROM
        reviews
        INNER JOIN users ON users.id = reviews.user_id
";

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateReviewPayload) -> Result<Review, Error> {
    sqlx::query_as::<_, Review>(
        "
        WITH inserted AS (
            INSERT INTO reviews (id, restaurant_id, user_id, score, comments)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
        )
        SELECT
            inserted.*,
            users.email AS user_email,
            users.name AS user_name
        FROM
            inserted
            INNER JOIN users ON users.id = inserted.user_id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.user_id)
    .bind(payload.score)
    .bind(payload.comments)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a review: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Review>, Error> {
    sqlx::query_as::<_, Review>(&format!("{SELECT_REVIEWS} WHERE reviews.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch review by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Review>, Error> {
    sqlx::query_as::<_, Review>(&format!(
        "{SELECT_REVIEWS} WHERE reviews.user_id = $1 ORDER BY reviews.created_at DESC"
    ))
    .bind(&user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch reviews written by {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Review>, Error> {
    sqlx::query_as::<_, Review>(&format!(
        "{SELECT_REVIEWS} WHERE reviews.restaurant_id = $1 ORDER BY reviews.created_at DESC"
    ))
    .bind(&restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch reviews of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateReviewPayload,
) -> Result<Option<Review>, Error> {
    sqlx::query_as::<_, Review>(
        "
        WITH updated AS (
            UPDATE reviews SET
                score = COALESCE($1, score),
                comments = COALESCE($2, comments),
                updated_at = NOW()
            WHERE
                id = $3
            RETURNING *
        )
        SELECT
            updated.*,
            users.email AS user_email,
            users.name AS user_name
        FROM
            updated
            INNER JOIN users ON users.id = updated.user_id
        ",
    )
    .bind(payload.score)
    .bind(payload.comments)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update review by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool, Error> {
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete review by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
