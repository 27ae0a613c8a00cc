mod errors;
mod handlers;
mod state;

use axum::{Router, routing::post};

pub use state::HttpState;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/load", post(handlers::load))
        .route("/report", post(handlers::report))
        .route("/share_link", post(handlers::share_link));

    Router::new().nest("/api", api).with_state(state)
}
