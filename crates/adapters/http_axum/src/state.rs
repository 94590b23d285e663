//! Shared application state for axum handlers.

use std::sync::Arc;

use birdview_app::ports::{SettingsProvider, TemplateRenderer};
use birdview_app::services::render_service::RenderService;

/// Application state shared across all axum handlers.
///
/// Generic over the template renderer and the settings provider to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, S> {
    /// Page and fragment rendering.
    pub render_service: Arc<RenderService<R>>,
    /// Source of the settings snapshot taken at the start of each request.
    pub settings: Arc<S>,
}

impl<R, S> Clone for AppState<R, S> {
    fn clone(&self) -> Self {
        Self {
            render_service: Arc::clone(&self.render_service),
            settings: Arc::clone(&self.settings),
        }
    }
}

impl<R, S> AppState<R, S>
where
    R: TemplateRenderer + Send + Sync + 'static,
    S: SettingsProvider + Send + Sync + 'static,
{
    /// Create a new application state from owned services.
    pub fn new(render_service: RenderService<R>, settings: S) -> Self {
        Self {
            render_service: Arc::new(render_service),
            settings: Arc::new(settings),
        }
    }

    /// Create a new application state from pre-wrapped `Arc`s.
    ///
    /// Use this when the settings provider is shared with a background task
    /// (e.g. the config file watcher) before constructing the HTTP state.
    pub fn from_arcs(render_service: Arc<RenderService<R>>, settings: Arc<S>) -> Self {
        Self {
            render_service,
            settings,
        }
    }
}
