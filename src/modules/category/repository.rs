use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

pub struct CreateCategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateCategoryPayload,
) -> Result<Category, Error> {
    sqlx::query_as::<_, Category>(
        "
        INSERT INTO categories (id, name, description)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name.trim())
    .bind(payload.description)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a category: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_name<'e, E: PgExecutor<'e>>(
    e: E,
    name: String,
) -> Result<Option<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE LOWER(name) = LOWER(TRIM($1))")
        .bind(&name)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch category by name {}: {}",
                name,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Category>, Error> {
    sqlx::query_as::<_, Category>(
        "
        SELECT
            categories.*
        FROM
            categories
            INNER JOIN restaurant_categories
                ON restaurant_categories.category_id = categories.id
        WHERE
            restaurant_categories.restaurant_id = $1
        ORDER BY categories.name ASC
        ",
    )
    .bind(&restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch categories of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn associate<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
    category_id: String,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO restaurant_categories (restaurant_id, category_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        ",
    )
    .bind(&restaurant_id)
    .bind(&category_id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while associating category {} with restaurant {}: {}",
            category_id,
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn disassociate<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
    category_id: String,
) -> Result<bool, Error> {
    sqlx::query(
        "DELETE FROM restaurant_categories WHERE restaurant_id = $1 AND category_id = $2",
    )
    .bind(&restaurant_id)
    .bind(&category_id)
    .execute(e)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!(
            "Error occurred while disassociating category {} from restaurant {}: {}",
            category_id,
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct References {
    pub products: i64,
    pub restaurants: i64,
}

/// Counts what still points at a category.
pub async fn count_references<'e, E: PgExecutor<'e>>(
    e: E,
    category_id: String,
) -> Result<References, Error> {
    sqlx::query_as::<_, References>(
        "
        SELECT
            (SELECT COUNT(*) FROM products WHERE category_id = $1) AS products,
            (SELECT COUNT(*) FROM restaurant_categories WHERE category_id = $1) AS restaurants
        ",
    )
    .bind(&category_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while counting references to category {}: {}",
            category_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete category by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
