use super::types::{request, response};
use crate::{
    modules::order::{
        repository,
        service::{can_transition, is_restaurant_owner_of},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrderStatus)?
        .ok_or(response::Error::OrderNotFound)?;

    if !is_restaurant_owner_of(&order, &payload.auth) {
        return Err(response::Error::NotRestaurantOwner);
    }

    if !can_transition(&order.status, &payload.body.status) {
        return Err(response::Error::InvalidStatusTransition(
            order.status,
            payload.body.status,
        ));
    }

    match repository::update_status(
        &ctx.db_conn.pool,
        order.id,
        order.status.clone(),
        payload.body.status.clone(),
    )
    .await
    {
        Ok(true) => Ok(response::Success::OrderStatusUpdated(payload.body.status)),
        Ok(false) => Err(response::Error::InvalidStatusTransition(
            order.status,
            payload.body.status,
        )),
        Err(_) => Err(response::Error::FailedToUpdateOrderStatus),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        modules::{fixtures, order::repository::OrderStatus, user::repository::Role},
        types::test::database_context,
    };

    #[tokio::test]
    async fn should_move_order_forward_for_restaurant_owner() {
        let Some(ctx) = database_context().await else {
            return;
        };
        let owner = fixtures::user(&ctx, Role::Restaurant).await;
        let client = fixtures::user(&ctx, Role::Client).await;
        let restaurant = fixtures::restaurant(&ctx, &owner).await;
        let product = fixtures::product(&ctx, &restaurant, &fixtures::unique("Mains"), "10.00").await;
        let order = fixtures::order(&ctx, &client, &product, OrderStatus::Pending).await;

        let result = service(
            ctx.clone(),
            request::Payload {
                id: order.order.id.clone(),
                body: request::Body {
                    status: OrderStatus::Paid,
                },
                auth: fixtures::auth(&owner),
            },
        )
        .await;

        assert!(matches!(
            result,
            Ok(response::Success::OrderStatusUpdated(OrderStatus::Paid))
        ));
    }

    #[tokio::test]
    async fn should_reject_backward_transition() {
        let Some(ctx) = database_context().await else {
            return;
        };
        let owner = fixtures::user(&ctx, Role::Restaurant).await;
        let client = fixtures::user(&ctx, Role::Client).await;
        let restaurant = fixtures::restaurant(&ctx, &owner).await;
        let product = fixtures::product(&ctx, &restaurant, &fixtures::unique("Mains"), "10.00").await;
        let order = fixtures::order(&ctx, &client, &product, OrderStatus::Delivered).await;

        let result = service(
            ctx.clone(),
            request::Payload {
                id: order.order.id,
                body: request::Body {
                    status: OrderStatus::Pending,
                },
                auth: fixtures::auth(&owner),
            },
        )
        .await;

        assert!(matches!(
            result,
            Err(response::Error::InvalidStatusTransition(
                OrderStatus::Delivered,
                OrderStatus::Pending
            ))
        ));
    }

    #[tokio::test]
    async fn should_only_let_restaurant_owner_change_status() {
        let Some(ctx) = database_context().await else {
            return;
        };
        let owner = fixtures::user(&ctx, Role::Restaurant).await;
        let client = fixtures::user(&ctx, Role::Client).await;
        let restaurant = fixtures::restaurant(&ctx, &owner).await;
        let product = fixtures::product(&ctx, &restaurant, &fixtures::unique("Mains"), "10.00").await;
        let order = fixtures::order(&ctx, &client, &product, OrderStatus::Pending).await;

        let result = service(
            ctx.clone(),
            request::Payload {
                id: order.order.id,
                body: request::Body {
                    status: OrderStatus::Delivered,
                },
                auth: fixtures::auth(&client),
            },
        )
        .await;

        assert!(matches!(result, Err(response::Error::NotRestaurantOwner)));
    }
}
