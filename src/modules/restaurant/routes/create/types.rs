pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, code = "INVALID_NAME", message = "Name is required"))]
        pub name: String,
        pub description: Option<String>,
        #[validate(length(min = 1, code = "INVALID_CUISINE", message = "Cuisine is required"))]
        pub cuisine_id: String,
        pub phone: Option<String>,
        #[validate(email(code = "INVALID_EMAIL", message = "Invalid email address"))]
        pub email: Option<String>,
        pub address: Option<String>,
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

    use crate::{modules::restaurant::repository::Restaurant, utils::validation};

    pub enum Success {
        RestaurantCreated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated(restaurant) => {
                    (StatusCode::CREATED, Json(json!(restaurant))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        NotARestaurantAccount,
        CuisineNotFound,
        FailedToCreateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::NotARestaurantAccount => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "Only restaurant accounts can register restaurants" })),
                )
                    .into_response(),
                Self::CuisineNotFound => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Cuisine does not exist" })),
                )
                    .into_response(),
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
