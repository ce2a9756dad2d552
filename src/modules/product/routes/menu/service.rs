use super::types::{request, response};
use crate::{
    modules::{
        product::{repository, service::group_by_category},
        restaurant,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToFetchMenu)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let products =
        repository::find_many_by_restaurant_id(&ctx.db_conn.pool, restaurant.id.clone(), true)
            .await
            .map_err(|_| response::Error::FailedToFetchMenu)?;

    Ok(response::Success::Menu(
        restaurant,
        group_by_category(products),
    ))
}
