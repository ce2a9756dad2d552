pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Detail {
        pub product_id: String,
        #[validate(range(min = 1, code = "INVALID_QUANTITY", message = "Quantity must be at least 1"))]
        pub quantity: i32,
        pub subtotal: BigDecimal,
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        pub restaurant_id: String,
        pub total: BigDecimal,
        pub comments: Option<String>,
        #[validate(nested)]
        pub details: Vec<Detail>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::order::{repository::FullOrder, service},
        utils::validation,
    };

    pub enum Success {
        OrderCreated(FullOrder),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!(order))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        NotAClient,
        RestaurantNotFound,
        EmptyOrderDetails,
        InvalidOrderDetails,
        InvalidAmount,
        TotalMismatch,
        ProductNotFound(String),
        ProductNotInRestaurant(String),
        ProductInactive(String),
        FailedToCreateOrder,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::EmptyOrderDetails => Self::EmptyOrderDetails,
                service::Error::InvalidQuantity | service::Error::InvalidSubtotal => {
                    Self::InvalidOrderDetails
                }
                service::Error::InvalidAmount => Self::InvalidAmount,
                service::Error::TotalMismatch => Self::TotalMismatch,
                service::Error::ProductNotFound(id) => Self::ProductNotFound(id),
                service::Error::ProductNotInRestaurant(id) => Self::ProductNotInRestaurant(id),
                service::Error::ProductInactive(id) => Self::ProductInactive(id),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::NotAClient => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "Only clients can place orders" })),
                )
                    .into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::EmptyOrderDetails => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "An order needs at least one item" })),
                )
                    .into_response(),
                Self::InvalidOrderDetails => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Order items need a quantity of at least 1 and a non-negative subtotal" })),
                )
                    .into_response(),
                Self::InvalidAmount => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Amounts must have at most two decimals and fit below 100000000" })),
                )
                    .into_response(),
                Self::TotalMismatch => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Order total does not match the sum of its items" })),
                )
                    .into_response(),
                Self::ProductNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Product {} not found", id) })),
                )
                    .into_response(),
                Self::ProductNotInRestaurant(id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Product {} is not sold by this restaurant", id) })),
                )
                    .into_response(),
                Self::ProductInactive(id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Product {} is not available", id) })),
                )
                    .into_response(),
                Self::FailedToCreateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
