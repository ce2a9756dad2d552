pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::product::repository::Product;

    pub enum Success {
        Product(Product),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Product(product) => (StatusCode::OK, Json(json!(product))).into_response(),
            }
        }
    }

    pub enum Error {
        ProductNotFound,
        FailedToFetchProduct,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Product not found" })),
                )
                    .into_response(),
                Self::FailedToFetchProduct => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch product" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
