//! # birdview-adapter-templates-askama
//!
//! Template engine adapter built on [askama](https://docs.rs/askama).
//!
//! ## Responsibilities
//! - Implement the `TemplateRenderer` port: look a template up **by name**
//!   and render it with a `RenderContext`
//! - Shape the render context into the typed views each compiled template
//!   expects (`views` module)
//! - Report unknown names and missing context fields as `TemplateError`s
//!
//! Templates are compiled into the binary; the set of names is closed and
//! listed in [`TEMPLATE_NAMES`].
//!
//! ## Dependency rule
//! Depends on `birdview-app` (for the port trait and the render context) and
//! `birdview-domain`. Askama types never leak out of this crate.

mod views;

use askama::Template;

use birdview_app::context::{RenderContext, fragment_template_name};
use birdview_app::ports::{TemplateError, TemplateRenderer};
use birdview_app::route_table::RouteTable;
use birdview_app::services::render_service::PAGE_SHELL_TEMPLATE;

use crate::views::{
    AudioSettingsView, DashboardSettingsView, DashboardView, DetectionFiltersView, IndexView,
    LogsView, MainSettingsView, SettingsBaseView, SpeciesSettingsView, StatsView,
};

/// Every template name this renderer knows.
pub const TEMPLATE_NAMES: &[&str] = &[
    "index",
    "dashboard",
    "logs",
    "stats",
    "settingsBase",
    "mainSettings",
    "audioSettings",
    "dashboardSettings",
    "detectionfiltersSettings",
    "speciesSettings",
];

/// Askama-backed [`TemplateRenderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AskamaRenderer;

impl AskamaRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether a template called `name` exists.
    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        TEMPLATE_NAMES.contains(&name)
    }

    /// Templates that `routes` needs but this renderer does not provide.
    ///
    /// Covers the page shell, each route's content template and, for
    /// settings pages, the panel derived from the path.
    #[must_use]
    pub fn missing_templates(&self, routes: &RouteTable) -> Vec<String> {
        let mut needed = vec![PAGE_SHELL_TEMPLATE.to_string()];
        for route in routes.iter() {
            needed.push(route.template_name.clone());
            if let Ok(panel) = fragment_template_name(&route.path) {
                needed.push(panel);
            }
        }

        let mut missing: Vec<String> = Vec::new();
        for name in needed {
            if !self.knows(&name) && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }
}

impl TemplateRenderer for AskamaRenderer {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String, TemplateError> {
        tracing::debug!(template = name, path = %context.path, "rendering template");
        let rendered = match name {
            "index" => IndexView::from_context(context)?.render(),
            "dashboard" => DashboardView::from_context(context).render(),
            "logs" => LogsView::from_context(context).render(),
            "stats" => StatsView::from_context(context).render(),
            "settingsBase" => SettingsBaseView::from_context(context)?.render(),
            "mainSettings" => MainSettingsView::from_context(context).render(),
            "audioSettings" => AudioSettingsView::from_context(context).render(),
            "dashboardSettings" => DashboardSettingsView::from_context(context).render(),
            "detectionfiltersSettings" => DetectionFiltersView::from_context(context)?.render(),
            "speciesSettings" => SpeciesSettingsView::from_context(context)?.render(),
            _ => return Err(TemplateError::NotFound(name.to_string())),
        };
        rendered.map_err(|err| TemplateError::Execution(Box::new(err)))
    }
}
