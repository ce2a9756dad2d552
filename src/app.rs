use crate::{
    modules,
    types::{AppContext, AppEnvironment, Config, Context, ToContext},
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

/// Any origin in development; only the public app url in production.
fn allowed_origin(app: &AppContext) -> cors::AllowOrigin {
    match app.environment {
        AppEnvironment::Development => cors::AllowOrigin::any(),
        AppEnvironment::Production => match HeaderValue::from_str(&app.url) {
            Ok(origin) => cors::AllowOrigin::exact(origin),
            Err(err) => {
                tracing::warn!("URL {} is not a valid origin, CORS disabled: {}", app.url, err);
                cors::AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
    }
}

pub fn build_router(ctx: Arc<Context>) -> Router {
    let origin = allowed_origin(&ctx.app);

    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(origin),
        )
}

impl App {
    pub async fn new() -> Self {
        let ctx: Arc<Context> = Arc::new(Config::default().to_context().await);
        let router = build_router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = match TcpListener::bind(&address).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!("Failed to bind to {}: {}", address, err);
                return;
            }
        };

        tracing::info!("App is running on {}", self.ctx.app.url);

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server stopped unexpectedly: {}", err);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        modules::{
            auth::service::token,
            user::repository::{test::user, Role},
        },
        types::test::lazy_context,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(lazy_context()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_answer_health_check() {
        let (status, body) = send(Request::get("/api").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn should_reject_missing_bearer_token() {
        for (method, uri) in [
            ("GET", "/api/users/profile"),
            ("GET", "/api/orders"),
            ("GET", "/api/reviews/mine"),
            ("GET", "/api/restaurants/mine"),
            ("PUT", "/api/orders/some-order/cancel"),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let (status, _) = send(request).await;

            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn should_reject_garbage_bearer_token() {
        let request = Request::get("/api/users/profile")
            .header(header::AUTHORIZATION, "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid session token");
    }

    #[tokio::test]
    async fn should_reject_token_signed_with_another_secret() {
        let ctx = lazy_context();
        let mut auth = ctx.auth.clone();
        auth.jwt_secret = "another-secret".to_string();
        let issued = token::issue(&auth, &user("jane@example.com", Role::Client)).unwrap();

        let request = Request::get("/api/orders")
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", issued.access_token),
            )
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_validate_sign_up_before_touching_the_database() {
        let (status, body) = send(json_request(
            "POST",
            "/api/auth/sign-up",
            json!({
                "name": "Jane",
                "email": "not-an-email",
                "password": "password123",
                "role": "CLIENT"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_object());
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let request = Request::post("/api/auth/sign-in")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{"))
            .unwrap();
        let (status, _) = send(request).await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_routes() {
        let (status, _) = send(Request::get("/api/unknown").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    async fn preflight_origin(ctx: Arc<Context>) -> Option<String> {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/restaurants")
            .header(header::ORIGIN, "https://elsewhere.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = build_router(ctx).oneshot(request).await.unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn should_allow_any_origin_in_development() {
        assert_eq!(preflight_origin(lazy_context()).await.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn should_only_allow_app_url_in_production() {
        let mut ctx = (*lazy_context()).clone();
        ctx.app.environment = AppEnvironment::Production;
        ctx.app.url = "https://marketplace.example.com".to_string();

        assert_eq!(
            preflight_origin(Arc::new(ctx)).await.as_deref(),
            Some("https://marketplace.example.com")
        );
    }
}
