pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    fn default_is_active() -> bool {
        true
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        pub restaurant_id: String,
        #[validate(length(min = 1, code = "INVALID_CATEGORY", message = "Category is required"))]
        pub category: String,
        pub category_description: Option<String>,
        #[validate(length(min = 1, code = "INVALID_NAME", message = "Name is required"))]
        pub name: String,
        pub description: Option<String>,
        pub price: BigDecimal,
        #[validate(url(code = "INVALID_IMAGE_URL", message = "Image must be a valid url"))]
        pub image_url: Option<String>,
        #[serde(default = "default_is_active")]
        pub is_active: bool,
        #[validate(range(min = 0, code = "INVALID_QUANTITY", message = "Quantity cannot be negative"))]
        #[serde(default)]
        pub quantity: i32,
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
        modules::{product::repository::Product, restaurant},
        utils::validation,
    };

    pub enum Success {
        ProductCreated(Product),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductCreated(product) => {
                    (StatusCode::CREATED, Json(json!(product))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidPrice,
        RestaurantNotFound,
        NotRestaurantOwner,
        FailedToCreateProduct,
    }

    impl From<restaurant::service::Error> for Error {
        fn from(err: restaurant::service::Error) -> Self {
            match err {
                restaurant::service::Error::RestaurantNotFound => Self::RestaurantNotFound,
                restaurant::service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
                restaurant::service::Error::UnexpectedError => Self::FailedToCreateProduct,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidPrice => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Price must be a non-negative amount with at most two decimals" })),
                )
                    .into_response(),
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
                Self::FailedToCreateProduct => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create product" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
