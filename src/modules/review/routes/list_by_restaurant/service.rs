use super::types::{request, response};
use crate::{
    modules::{
        restaurant,
        review::{repository, service::average_score},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToFetchReviews)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let reviews = repository::find_many_by_restaurant_id(&ctx.db_conn.pool, restaurant.id)
        .await
        .map_err(|_| response::Error::FailedToFetchReviews)?;

    Ok(response::Success::Reviews {
        average_score: average_score(&reviews),
        reviews,
    })
}
