use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{FromRow, PgConnection, PgExecutor};
use std::str::FromStr;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PAID")]
    Paid,
    #[serde(rename = "DELIVERED")]
    Delivered,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("PENDING"),
            OrderStatus::Paid => String::from("PAID"),
            OrderStatus::Delivered => String::from("DELIVERED"),
            OrderStatus::Cancelled => String::from("CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub client_email: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    #[serde(skip_serializing, default)]
    pub restaurant_owner_email: String,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub total: BigDecimal,
    pub comments: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct OrderDetail {
    pub id: String,
    pub order_id: String,
    pub product_id: Option<String>,
    pub product_name: String,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

#[derive(Serialize, Clone, Debug)]
pub struct FullOrder {
    #[serde(flatten)]
    pub order: Order,
    pub details: Vec<OrderDetail>,
}

pub struct CreateOrderDetailPayload {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub subtotal: BigDecimal,
}

pub struct CreateOrderPayload {
    pub client_id: String,
    pub restaurant_id: String,
    pub total: BigDecimal,
    pub comments: Option<String>,
    pub details: Vec<CreateOrderDetailPayload>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Filters {
    pub status: Option<OrderStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SELECT_ORDERS: &str = "
    SELECT
        orders.*,
        clients.email AS client_email,
        restaurants.name AS restaurant_name,
        owners.email AS restaurant_owner_email
    FROM
        orders
        INNER JOIN users clients ON clients.id = orders.client_id
        INNER JOIN restaurants ON restaurants.id = orders.restaurant_id
        INNER JOIN users owners ON owners.id = restaurants.owner_id
";

/// Inserts the order and all of its details on the same connection.
pub async fn create(conn: &mut PgConnection, payload: CreateOrderPayload) -> Result<FullOrder, Error> {
    let order_id = Ulid::new().to_string();

    sqlx::query(
        "
        INSERT INTO orders (id, client_id, restaurant_id, status, total, comments)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(&order_id)
    .bind(payload.client_id)
    .bind(payload.restaurant_id)
    .bind(OrderStatus::Pending.to_string())
    .bind(payload.total)
    .bind(payload.comments)
    .execute(&mut *conn)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create order: {}", err);
        Error::UnexpectedError
    })?;

    let mut details = Vec::with_capacity(payload.details.len());
    for detail in payload.details {
        let detail = sqlx::query_as::<_, OrderDetail>(
            "
            INSERT INTO order_details (id, order_id, product_id, product_name, quantity, subtotal)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(&order_id)
        .bind(detail.product_id)
        .bind(detail.product_name)
        .bind(detail.quantity)
        .bind(detail.subtotal)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to create details for order {}: {}",
                order_id,
                err
            );
            Error::UnexpectedError
        })?;
        details.push(detail);
    }

    let order = sqlx::query_as::<_, Order>(&format!("{SELECT_ORDERS} WHERE orders.id = $1"))
        .bind(&order_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch created order: {}", err);
            Error::UnexpectedError
        })?;

    Ok(FullOrder { order, details })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>(&format!("{SELECT_ORDERS} WHERE orders.id = $1"))
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch order by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_details_by_order_ids<'e, E: PgExecutor<'e>>(
    e: E,
    order_ids: Vec<String>,
) -> Result<Vec<OrderDetail>, Error> {
    sqlx::query_as::<_, OrderDetail>(
        "SELECT * FROM order_details WHERE order_id = ANY($1) ORDER BY product_name ASC",
    )
    .bind(order_ids)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch order details: {}", err);
        Error::UnexpectedError
    })
}

/// Attaches each detail to its order, keeping the order sequence.
pub fn with_details(orders: Vec<Order>, details: Vec<OrderDetail>) -> Vec<FullOrder> {
    let mut orders = orders
        .into_iter()
        .map(|order| FullOrder {
            order,
            details: vec![],
        })
        .collect::<Vec<_>>();

    for detail in details {
        if let Some(order) = orders
            .iter_mut()
            .find(|full| full.order.id == detail.order_id)
        {
            order.details.push(detail);
        }
    }

    orders
}

pub async fn find_full_by_id<'e, E>(e: E, id: String) -> Result<Option<FullOrder>, Error>
where
    E: PgExecutor<'e> + Copy,
{
    let order = match find_by_id(e, id).await? {
        Some(order) => order,
        None => return Ok(None),
    };

    let details = find_details_by_order_ids(e, vec![order.id.clone()]).await?;

    Ok(Some(FullOrder { order, details }))
}

pub enum Scope {
    Client(String),
    Restaurant(String),
}

pub async fn find_many<'e, E>(
    e: E,
    scope: Scope,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<FullOrder>, Error>
where
    E: PgExecutor<'e> + Copy,
{
    let (column, owner) = match scope {
        Scope::Client(id) => ("orders.client_id", id),
        Scope::Restaurant(id) => ("orders.restaurant_id", id),
    };

    let filter = format!(
        "
        WHERE
            {column} = $1
            AND ($2::TEXT IS NULL OR orders.status = $2)
            AND ($3::DATE IS NULL OR orders.created_at >= $3)
            AND ($4::DATE IS NULL OR orders.created_at < $4 + INTERVAL '1 day')
        "
    );
    let status = filters.status.map(|status| status.to_string());

    let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(orders.id) FROM orders {filter}"))
        .bind(&owner)
        .bind(status.clone())
        .bind(filters.from)
        .bind(filters.to)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count orders: {}", err);
            Error::UnexpectedError
        })?;

    let orders = sqlx::query_as::<_, Order>(&format!(
        "{SELECT_ORDERS} {filter} ORDER BY orders.created_at DESC LIMIT $5 OFFSET $6"
    ))
    .bind(&owner)
    .bind(status)
    .bind(filters.from)
    .bind(filters.to)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many orders: {}", err);
        Error::UnexpectedError
    })?;

    let details =
        find_details_by_order_ids(e, orders.iter().map(|order| order.id.clone()).collect())
            .await?;

    Ok(Paginated::new(
        with_details(orders, details),
        total as u32,
        pagination.page.max(1),
        pagination.limit() as u32,
    ))
}

/// Moves an order from `from` to `to`. Returns `false` when the order is no longer in `from`.
pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<bool, Error> {
    sqlx::query("UPDATE orders SET status = $1, updated_at = NOW() WHERE id = $2 AND status = $3")
        .bind(to.to_string())
        .bind(&id)
        .bind(from.to_string())
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update status of order {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn detail(order_id: &str, product_name: &str) -> OrderDetail {
        OrderDetail {
            id: Ulid::new().to_string(),
            order_id: order_id.to_string(),
            product_id: None,
            product_name: product_name.to_string(),
            quantity: 1,
            subtotal: BigDecimal::from(5),
        }
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            client_id: Ulid::new().to_string(),
            client_email: "client@example.com".to_string(),
            restaurant_id: Ulid::new().to_string(),
            restaurant_name: "Trattoria".to_string(),
            restaurant_owner_email: "owner@example.com".to_string(),
            status: OrderStatus::Pending,
            total: BigDecimal::from(5),
            comments: None,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn should_attach_details_to_their_orders() {
        let orders = with_details(
            vec![order("a"), order("b")],
            vec![detail("b", "Pizza"), detail("a", "Pasta"), detail("b", "Salad")],
        );

        assert_eq!(orders[0].order.id, "a");
        assert_eq!(orders[0].details.len(), 1);
        assert_eq!(orders[1].details.len(), 2);
    }

    #[test]
    fn should_serialize_full_order_flat() {
        let json = serde_json::to_value(FullOrder {
            order: order("a"),
            details: vec![detail("a", "Pasta")],
        })
        .unwrap();

        assert_eq!(json["id"], "a");
        assert_eq!(json["status"], "PENDING");
        assert!(json.get("restaurant_owner_email").is_none());
        assert_eq!(json["details"][0]["product_name"], "Pasta");
    }

    #[test]
    fn should_parse_status() {
        assert_eq!("PAID".parse::<OrderStatus>(), Ok(OrderStatus::Paid));
        assert!("paid".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn should_reject_unknown_stored_status_without_panicking() {
        assert_eq!(
            OrderStatus::try_from("DELIVERED".to_string()),
            Ok(OrderStatus::Delivered)
        );
        assert!(OrderStatus::try_from("REFUNDED".to_string()).is_err());
    }
}
