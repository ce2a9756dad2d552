use super::types::{request, response};
use crate::{
    modules::product::{repository, service::group_by_restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many_active(&ctx.db_conn.pool, payload.filters.category)
        .await
        .map_err(|_| response::Error::FailedToFetchCatalog)
        .map(group_by_restaurant)
        .map(response::Success::Catalog)
}
