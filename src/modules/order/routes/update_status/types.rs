pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use crate::modules::order::repository;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: repository::OrderStatus,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::order::repository::OrderStatus;

    pub enum Success {
        OrderStatusUpdated(OrderStatus),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderStatusUpdated(status) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order status updated successfully", "status": status })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        NotRestaurantOwner,
        InvalidStatusTransition(OrderStatus, OrderStatus),
        FailedToUpdateOrderStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::NotRestaurantOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "User does not own the restaurant of this order" })),
                )
                    .into_response(),
                Self::InvalidStatusTransition(from, to) => (
                    StatusCode::CONFLICT,
                    Json(json!({
                        "error": format!(
                            "Cannot move order from {} to {}",
                            from.to_string(),
                            to.to_string()
                        )
                    })),
                )
                    .into_response(),
                Self::FailedToUpdateOrderStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
