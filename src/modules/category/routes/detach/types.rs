pub mod request {
    pub use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub restaurant_id: String,
        pub category_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::restaurant;

    pub enum Success {
        CategoryRemoved,
        CategoryDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CategoryRemoved => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Category removed from restaurant",
                        "deleted_globally": false,
                    })),
                )
                    .into_response(),
                Self::CategoryDeleted => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Category deleted",
                        "deleted_globally": true,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        NotRestaurantOwner,
        CategoryNotFound,
        FailedToDeleteCategory,
    }

    impl From<restaurant::service::Error> for Error {
        fn from(err: restaurant::service::Error) -> Self {
            match err {
                restaurant::service::Error::RestaurantNotFound => Self::RestaurantNotFound,
                restaurant::service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
                restaurant::service::Error::UnexpectedError => Self::FailedToDeleteCategory,
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
                Self::CategoryNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Category not found for this restaurant" })),
                )
                    .into_response(),
                Self::FailedToDeleteCategory => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete category" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
