//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use birdview_app::ports::{SettingsProvider, TemplateRenderer};

use crate::pages;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Every path of the frozen route table is mounted as a page route; the
/// fallback goes through the same handler so that misses surface as 404s.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R, S>(state: AppState<R, S>) -> Router
where
    R: TemplateRenderer + Send + Sync + 'static,
    S: SettingsProvider + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/fragments/settings/{panel}",
            get(pages::fragment::<R, S>),
        );

    for route in state.render_service.routes().iter() {
        router = router.route(&route.path, get(pages::page::<R, S>));
    }

    router
        .fallback(pages::page::<R, S>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
