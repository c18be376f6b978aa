use crate::AppState;
use axum::Router;

pub mod calculator;
pub mod health;

/// Merge all routes
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(health::routes())
            .nest("/calculator", calculator::routes()),
    )
}
