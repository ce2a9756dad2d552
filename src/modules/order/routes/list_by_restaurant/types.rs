pub mod request {
    pub use crate::modules::{auth::middleware::Auth, order::repository::Filters};
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub restaurant_id: String,
        pub auth: Auth,
        pub filters: Filters,
        pub pagination: Pagination,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        modules::{order::repository::FullOrder, restaurant},
        utils::pagination::Paginated,
    };

    pub enum Success {
        Orders(Paginated<FullOrder>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => (StatusCode::OK, Json(json!(orders))).into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToFetchOrders,
    }

    impl From<restaurant::service::Error> for Error {
        fn from(err: restaurant::service::Error) -> Self {
            match err {
                restaurant::service::Error::RestaurantNotFound => Self::RestaurantNotFound,
                restaurant::service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
                restaurant::service::Error::UnexpectedError => Self::FailedToFetchOrders,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::NotRestaurantOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "User does not own this restaurant" })),
                )
                    .into_response(),
                Self::FailedToFetchOrders => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch orders" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
