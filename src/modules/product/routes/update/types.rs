pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, code = "INVALID_CATEGORY", message = "Category cannot be empty"))]
        pub category: Option<String>,
        #[validate(length(min = 1, code = "INVALID_NAME", message = "Name cannot be empty"))]
        pub name: Option<String>,
        pub description: Option<String>,
        pub price: Option<BigDecimal>,
        #[validate(url(code = "INVALID_IMAGE_URL", message = "Image must be a valid url"))]
        pub image_url: Option<String>,
        pub is_active: Option<bool>,
        #[validate(range(min = 0, code = "INVALID_QUANTITY", message = "Quantity cannot be negative"))]
        pub quantity: Option<i32>,
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
        modules::product::{repository::Product, service},
        utils::validation,
    };

    pub enum Success {
        ProductUpdated(Product),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProductUpdated(product) => {
                    (StatusCode::OK, Json(json!(product))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidPrice,
        ProductNotFound,
        NotRestaurantOwner,
        FailedToUpdateProduct,
    }

    impl From<service::Error> for Error {
        fn from(err: service::Error) -> Self {
            match err {
                service::Error::ProductNotFound | service::Error::RestaurantNotFound => {
                    Self::ProductNotFound
                }
                service::Error::NotRestaurantOwner => Self::NotRestaurantOwner,
                service::Error::UnexpectedError => Self::FailedToUpdateProduct,
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
                Self::FailedToUpdateProduct => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update product" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
