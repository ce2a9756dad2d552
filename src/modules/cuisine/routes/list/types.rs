pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::cuisine::repository::Cuisine;

    pub enum Success {
        Cuisines(Vec<Cuisine>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cuisines(cuisines) => (StatusCode::OK, Json(json!(cuisines))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchCuisines,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCuisines => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cuisines" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
