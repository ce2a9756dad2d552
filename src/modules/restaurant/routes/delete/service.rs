use super::types::{request, response};
use crate::{
    modules::restaurant::{repository, service::find_owned},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = find_owned(&ctx.db_conn.pool, payload.id, &payload.auth).await?;

    match repository::delete_by_id(&ctx.db_conn.pool, restaurant.id.clone()).await {
        Ok(true) => {
            tracing::info!("Deleted restaurant {}", restaurant.id);
            Ok(response::Success::RestaurantDeleted)
        }
        Ok(false) => Err(response::Error::RestaurantNotFound),
        Err(_) => Err(response::Error::FailedToDeleteRestaurant),
    }
}
