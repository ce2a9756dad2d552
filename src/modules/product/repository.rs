use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Product {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub category_id: String,
    pub category_name: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateProductPayload {
    pub restaurant_id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub quantity: i32,
}

pub struct UpdateProductPayload {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub quantity: Option<i32>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_PRODUCTS: &str = "
    SELECT
        products.*,
        restaurants.name AS restaurant_name,
        categories.name AS category_name
    FROM
        products
        INNER JOIN restaurants ON restaurants.id = products.restaurant_id
        INNER JOIN categories ON categories.id = products.category_id
";

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateProductPayload,
) -> Result<Product, Error> {
    sqlx::query_as::<_, Product>(
        "
        WITH inserted AS (
            INSERT INTO products (
                id,
                restaurant_id,
                category_id,
                name,
                description,
                price,
                image_url,
                is_active,
                quantity
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
        )
        SELECT
            inserted.*,
            restaurants.name AS restaurant_name,
            categories.name AS category_name
        FROM
            inserted
            INNER JOIN restaurants ON restaurants.id = inserted.restaurant_id
            INNER JOIN categories ON categories.id = inserted.category_id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.quantity)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a product: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Product>, Error> {
    sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} WHERE products.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch product by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    ids: Vec<String>,
) -> Result<Vec<Product>, Error> {
    sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCTS} WHERE products.id = ANY($1)"))
        .bind(ids)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch products by ids: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
    active_only: bool,
) -> Result<Vec<Product>, Error> {
    sqlx::query_as::<_, Product>(&format!(
        "
        {SELECT_PRODUCTS}
        WHERE
            products.restaurant_id = $1
            AND (NOT $2 OR products.is_active)
        ORDER BY categories.name ASC, products.name ASC
        "
    ))
    .bind(&restaurant_id)
    .bind(active_only)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch products of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_active<'e, E: PgExecutor<'e>>(
    e: E,
    category: Option<String>,
) -> Result<Vec<Product>, Error> {
    sqlx::query_as::<_, Product>(&format!(
        "
        {SELECT_PRODUCTS}
        WHERE
            products.is_active
            AND ($1::TEXT IS NULL OR LOWER(categories.name) = LOWER($1))
        ORDER BY restaurants.name ASC, categories.name ASC, products.name ASC
        "
    ))
    .bind(category)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch the catalog: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateProductPayload,
) -> Result<Option<Product>, Error> {
    sqlx::query_as::<_, Product>(
        "
        WITH updated AS (
            UPDATE products SET
                category_id = COALESCE($1, category_id),
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                image_url = COALESCE($5, image_url),
                is_active = COALESCE($6, is_active),
                quantity = COALESCE($7, quantity),
                updated_at = NOW()
            WHERE
                id = $8
            RETURNING *
        )
        SELECT
            updated.*,
            restaurants.name AS restaurant_name,
            categories.name AS category_name
        FROM
            updated
            INNER JOIN restaurants ON restaurants.id = updated.restaurant_id
            INNER JOIN categories ON categories.id = updated.category_id
        ",
    )
    .bind(payload.category_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.image_url)
    .bind(payload.is_active)
    .bind(payload.quantity)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update product by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool, Error> {
    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete product by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
