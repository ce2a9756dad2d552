use super::types::{request, response};
use crate::{
    modules::{restaurant::repository, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !user::repository::is_restaurant_owner(&payload.auth.user) {
        return Err(response::Error::NotARestaurantAccount);
    }

    repository::find_many_by_owner_id(&ctx.db_conn.pool, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurants)
        .map(response::Success::Restaurants)
}
