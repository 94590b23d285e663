//! Server-side rendered dashboard pages and settings fragments.

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;

use birdview_app::context::SETTINGS_PREFIX;
use birdview_app::ports::{SettingsProvider, TemplateRenderer};

use crate::error::PageError;
use crate::state::AppState;

/// `GET <page path>`: full page resolved through the route table.
///
/// Also installed as the router fallback, so unregistered paths reach the
/// render service and come back as a logged 404.
pub async fn page<R, S>(
    State(state): State<AppState<R, S>>,
    uri: Uri,
) -> Result<Html<String>, PageError>
where
    R: TemplateRenderer + Send + Sync + 'static,
    S: SettingsProvider + Send + Sync + 'static,
{
    let settings = state.settings.snapshot();
    let markup = state.render_service.render_page(uri.path(), &settings)?;
    Ok(Html(markup))
}

/// `GET /fragments/settings/{panel}`: settings panel without the page shell.
pub async fn fragment<R, S>(
    State(state): State<AppState<R, S>>,
    Path(panel): Path<String>,
) -> Result<Html<String>, PageError>
where
    R: TemplateRenderer + Send + Sync + 'static,
    S: SettingsProvider + Send + Sync + 'static,
{
    tracing::debug!(panel = %panel, "settings fragment requested");
    let settings = state.settings.snapshot();
    let path = format!("{SETTINGS_PREFIX}{panel}");
    let markup = state.render_service.render_fragment(&path, &settings)?;
    Ok(Html(markup))
}
