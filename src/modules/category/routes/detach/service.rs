use super::types::{request, response};
use crate::{
    modules::{
        category::service::{detach_from_restaurant, Deletion},
        restaurant::service::find_owned,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = find_owned(&ctx.db_conn.pool, payload.restaurant_id, &payload.auth).await?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToDeleteCategory
    })?;

    let deletion = detach_from_restaurant(&mut tx, restaurant.id, payload.category_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToDeleteCategory
    })?;

    Ok(match deletion {
        Deletion::Disassociated => response::Success::CategoryRemoved,
        Deletion::DeletedGlobally => response::Success::CategoryDeleted,
    })
}
