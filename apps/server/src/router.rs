use axum::Router;
use tower_http::trace::TraceLayer;
use vacc::kernel::prelude::ApiState;
use vacc::server::router::{not_found, pages_router, system_router};

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    Router::new()
        .merge(system_router())
        .merge(pages_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
