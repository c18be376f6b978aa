use arithmos_core::Calculator;
use axum::{Router, http::HeaderValue};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

pub use config::{ApiConfig, ConfigOverrides, CorsConfig, ErrorEnvelope};
pub use envelope::OperationResponse;
pub use error::ApiError;

/// Application state
#[derive(Clone, Default)]
pub struct AppState {
    pub calculator: Calculator,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(calculator: Calculator, config: ApiConfig) -> Self {
        Self {
            calculator,
            config: Arc::new(config),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health_check,
        crate::routes::calculator::add,
        crate::routes::calculator::subtract,
        crate::routes::calculator::multiply,
        crate::routes::calculator::divide,
        crate::routes::calculator::exponent,
        crate::routes::calculator::sqrt,
        crate::routes::calculator::modulo,
    ),
    components(
        schemas(
            crate::routes::health::HealthResponse,
            crate::envelope::OperationResponse,
            crate::envelope::TwoOperandRequest,
            crate::envelope::ExponentRequest,
            crate::envelope::SqrtRequest,
            crate::envelope::ModuloRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "calculator", description = "Arithmetic operations")
    )
)]
pub struct ApiDoc;

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allow_any_origin {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build API application
pub fn build_app(state: AppState) -> Router {
    build_app_with(Router::new(), state)
}

/// Build API application with `extra` routes behind the same middleware stack
pub fn build_app_with(extra: Router<AppState>, state: AppState) -> Router {
    let mut app = Router::new().merge(routes::routes()).merge(extra);
    if state.config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    let cors = cors_layer(&state.config.cors);

    // CorsLayer answers OPTIONS on every path, matched or not
    app.layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
