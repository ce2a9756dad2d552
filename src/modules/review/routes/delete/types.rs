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

    use crate::modules::review::service;

    pub enum Success {
        ReviewDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Review deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ReviewNotFound,
        NotReviewAuthor,
        FailedToDeleteReview,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::ReviewNotFound => Self::ReviewNotFound,
                service::Error::NotReviewAuthor => Self::NotReviewAuthor,
                service::Error::UnexpectedError => Self::FailedToDeleteReview,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Review not found" })),
                )
                    .into_response(),
                Self::NotReviewAuthor => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "User did not write this review" })),
                )
                    .into_response(),
                Self::FailedToDeleteReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
