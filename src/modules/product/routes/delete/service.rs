use super::types::{request, response};
use crate::{
    modules::product::{repository, service::find_owned},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let product = find_owned(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    match repository::delete_by_id(&ctx.db_conn.pool, product.id).await {
        Ok(true) => Ok(response::Success::ProductDeleted),
        Ok(false) => Err(response::Error::ProductNotFound),
        Err(_) => Err(response::Error::FailedToDeleteProduct),
    }
}
