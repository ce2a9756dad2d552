use super::types::{request, response};
use crate::{
    modules::{
        order::{
            repository,
            service::{check_products, validate_details, DetailLine},
        },
        product, restaurant,
        user::repository::is_client,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if !is_client(&payload.auth.user) {
        return Err(response::Error::NotAClient);
    }

    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let lines = payload
        .body
        .details
        .into_iter()
        .map(|detail| DetailLine {
            product_id: detail.product_id,
            quantity: detail.quantity,
            subtotal: detail.subtotal,
        })
        .collect::<Vec<_>>();

    validate_details(&lines, &payload.body.total)?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToCreateOrder)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    let products = product::repository::find_many_by_ids(
        &mut *tx,
        lines.iter().map(|line| line.product_id.clone()).collect(),
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    check_products(&lines, &products, &restaurant.id)?;

    let details = lines
        .into_iter()
        .map(|line| {
            let product_name = products
                .iter()
                .find(|product| product.id == line.product_id)
                .map(|product| product.name.clone())
                .unwrap_or_default();

            repository::CreateOrderDetailPayload {
                product_id: line.product_id,
                product_name,
                quantity: line.quantity,
                subtotal: line.subtotal,
            }
        })
        .collect();

    let order = repository::create(
        &mut tx,
        repository::CreateOrderPayload {
            client_id: payload.auth.user.id,
            restaurant_id: restaurant.id,
            total: payload.body.total,
            comments: payload.body.comments,
            details,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateOrder
    })?;

    Ok(response::Success::OrderCreated(order))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        modules::{
            auth::middleware::Auth,
            fixtures,
            user::repository::{Role, User},
        },
        types::test::{database_context, lazy_context},
    };
    use chrono::Utc;
    use sqlx::types::BigDecimal;
    use std::str::FromStr;

    fn amount(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn client() -> Auth {
        Auth {
            user: User {
                id: "01J9Z0U0000000000000000001".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Client,
                phone: None,
                address: None,
                password_hash: String::new(),
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            },
        }
    }

    fn body(restaurant_id: &str, total: &str, details: Vec<(&str, i32, &str)>) -> request::Body {
        request::Body {
            restaurant_id: restaurant_id.to_string(),
            total: amount(total),
            comments: None,
            details: details
                .into_iter()
                .map(|(product_id, quantity, subtotal)| request::Detail {
                    product_id: product_id.to_string(),
                    quantity,
                    subtotal: amount(subtotal),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn should_reject_total_that_differs_from_subtotals() {
        let result = service(
            lazy_context(),
            request::Payload {
                auth: client(),
                body: body(
                    "01J9Z0R0000000000000000001",
                    "25.00",
                    vec![("01J9Z0P0000000000000000001", 2, "20.00")],
                ),
            },
        )
        .await;

        assert!(matches!(result, Err(response::Error::TotalMismatch)));
    }

    #[tokio::test]
    async fn should_reject_sub_cent_amounts_before_touching_the_database() {
        let result = service(
            lazy_context(),
            request::Payload {
                auth: client(),
                body: body(
                    "01J9Z0R0000000000000000001",
                    "0.01",
                    vec![
                        ("01J9Z0P0000000000000000001", 1, "0.005"),
                        ("01J9Z0P0000000000000000002", 1, "0.005"),
                    ],
                ),
            },
        )
        .await;

        assert!(matches!(result, Err(response::Error::InvalidAmount)));
    }

    #[tokio::test]
    async fn should_store_order_with_matching_total() {
        let Some(ctx) = database_context().await else {
            return;
        };
        let owner = fixtures::user(&ctx, Role::Restaurant).await;
        let client = fixtures::user(&ctx, Role::Client).await;
        let restaurant = fixtures::restaurant(&ctx, &owner).await;
        let category = fixtures::unique("Mains");
        let pizza = fixtures::product(&ctx, &restaurant, &category, "10.50").await;
        let pasta = fixtures::product(&ctx, &restaurant, &category, "8.25").await;

        let result = service(
            ctx.clone(),
            request::Payload {
                auth: fixtures::auth(&client),
                body: body(
                    &restaurant.id,
                    "29.25",
                    vec![(pizza.id.as_str(), 2, "21.00"), (pasta.id.as_str(), 1, "8.25")],
                ),
            },
        )
        .await;

        let Ok(response::Success::OrderCreated(order)) = result else {
            panic!("order was not created");
        };
        assert_eq!(order.order.total, amount("29.25"));
        assert_eq!(order.order.status, repository::OrderStatus::Pending);
        assert_eq!(order.details.len(), 2);
        let subtotals = order
            .details
            .iter()
            .fold(amount("0"), |sum, detail| sum + &detail.subtotal);
        assert_eq!(subtotals, order.order.total);
    }

    #[tokio::test]
    async fn should_reject_product_from_another_restaurant() {
        let Some(ctx) = database_context().await else {
            return;
        };
        let owner = fixtures::user(&ctx, Role::Restaurant).await;
        let client = fixtures::user(&ctx, Role::Client).await;
        let restaurant = fixtures::restaurant(&ctx, &owner).await;
        let other = fixtures::restaurant(&ctx, &owner).await;
        let pizza = fixtures::product(&ctx, &other, &fixtures::unique("Mains"), "10.00").await;

        let result = service(
            ctx.clone(),
            request::Payload {
                auth: fixtures::auth(&client),
                body: body(&restaurant.id, "10.00", vec![(pizza.id.as_str(), 1, "10.00")]),
            },
        )
        .await;

        assert!(
            matches!(result, Err(response::Error::ProductNotInRestaurant(id)) if id == pizza.id)
        );
    }
}
