pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(min = 0, max = 10, code = "INVALID_SCORE", message = "Score must be between 0 and 10"))]
        pub score: Option<i32>,
        pub comments: Option<String>,
    }

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::review::{repository::Review, service},
        utils::validation,
    };

    pub enum Success {
        ReviewUpdated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewUpdated(review) => (StatusCode::OK, Json(json!(review))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ReviewNotFound,
        NotReviewAuthor,
        FailedToUpdateReview,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::ReviewNotFound => Self::ReviewNotFound,
                service::Error::NotReviewAuthor => Self::NotReviewAuthor,
                service::Error::UnexpectedError => Self::FailedToUpdateReview,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
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
                Self::FailedToUpdateReview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update review" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
