use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Cuisine {
    pub id: String,
    pub name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Cuisine>, Error> {
    sqlx::query_as::<_, Cuisine>("SELECT * FROM cuisines ORDER BY name ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching cuisines: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Cuisine>, Error> {
    sqlx::query_as::<_, Cuisine>("SELECT * FROM cuisines WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching cuisine with id {}: {}", id, err);
            Error::UnexpectedError
        })
}
