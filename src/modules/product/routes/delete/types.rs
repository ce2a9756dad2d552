pub mod request {
    pub use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::product::service;

    pub enum Success {
        ProductDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Product deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ProductNotFound,
        NotRestaurantOwner,
        FailedToDeleteProduct,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::ProductNotFound | service::Error::RestaurantNotFound => {
                    Self::ProductNotFound
                }
                service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
                service::Error::UnexpectedError => Self::FailedToDeleteProduct,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Product not found" })),
                )
                    .into_response(),
                Self::NotRestaurantOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "User does not own this product" })),
                )
                    .into_response(),
                Self::FailedToDeleteProduct => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete product" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
