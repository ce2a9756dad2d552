use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Restaurant {
    pub id: String,
    pub owner_id: String,
    #[serde(skip_serializing, default)]
    pub owner_email: String,
    pub name: String,
    pub description: Option<String>,
    pub cuisine_id: String,
    pub cuisine_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateRestaurantPayload {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub cuisine_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Filters {
    pub cuisine_id: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_RESTAURANTS: &str = "
    SELECT
        restaurants.*,
        users.email AS owner_email,
        cuisines.name AS cuisine_name
    FROM
        restaurants
        INNER JOIN users ON users.id = restaurants.owner_id
        INNER JOIN cuisines ON cuisines.id = restaurants.cuisine_id
";

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        WITH inserted AS (
            INSERT INTO restaurants (
                id,
                owner_id,
                name,
                description,
                cuisine_id,
                phone,
                email,
                address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        )
        SELECT
            inserted.*,
            users.email AS owner_email,
            cuisines.name AS cuisine_name
        FROM
            inserted
            INNER JOIN users ON users.id = inserted.owner_id
            INNER JOIN cuisines ON cuisines.id = inserted.cuisine_id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.owner_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.cuisine_id)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(payload.address)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(&format!("{SELECT_RESTAURANTS} WHERE restaurants.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch restaurant by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(&format!(
        "{SELECT_RESTAURANTS} WHERE restaurants.owner_id = $1 ORDER BY restaurants.created_at ASC"
    ))
    .bind(&owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch restaurants owned by {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<Restaurant>, Error>
where
    E: PgExecutor<'e> + Copy,
{
    let filter = "
        WHERE
            ($1::TEXT IS NULL OR restaurants.cuisine_id = $1)
            AND ($2::TEXT IS NULL OR restaurants.name ILIKE '%' || $2 || '%')
    ";

    let total = sqlx::query_scalar::<_, i64>(&format!(
        "SELECT COUNT(restaurants.id) FROM restaurants {filter}"
    ))
    .bind(filters.cuisine_id.clone())
    .bind(filters.search.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count restaurants: {}", err);
        Error::UnexpectedError
    })?;

    let restaurants = sqlx::query_as::<_, Restaurant>(&format!(
        "{SELECT_RESTAURANTS} {filter} ORDER BY restaurants.name ASC LIMIT $3 OFFSET $4"
    ))
    .bind(filters.cuisine_id)
    .bind(filters.search)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many restaurants: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Paginated::new(
        restaurants,
        total as u32,
        pagination.page.max(1),
        pagination.limit() as u32,
    ))
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        WITH updated AS (
            UPDATE restaurants SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                cuisine_id = COALESCE($3, cuisine_id),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email),
                address = COALESCE($6, address),
                updated_at = NOW()
            WHERE
                id = $7
            RETURNING *
        )
        SELECT
            updated.*,
            users.email AS owner_email,
            cuisines.name AS cuisine_name
        FROM
            updated
            INNER JOIN users ON users.id = updated.owner_id
            INNER JOIN cuisines ON cuisines.id = updated.cuisine_id
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.cuisine_id)
    .bind(payload.phone)
    .bind(payload.email)
    .bind(payload.address)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool, Error> {
    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete restaurant by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
