//! Render service: dispatches full-page and fragment rendering.

use std::sync::Arc;

use birdview_domain::error::{BirdviewError, RenderError};
use birdview_domain::settings::Settings;

use crate::context::{
    CONTENT, ExtraField, RenderContext, SETTINGS_CONTENT, build_fragment_context,
    build_page_context, is_settings_path,
};
use crate::ports::TemplateRenderer;
use crate::route_table::RouteTable;

/// Template wrapping every full page.
pub const PAGE_SHELL_TEMPLATE: &str = "index";

/// Application service turning request paths into markup.
///
/// Pages go through the frozen [`RouteTable`]; fragments are resolved by
/// naming convention (see [`crate::context`]).
pub struct RenderService<R> {
    routes: RouteTable,
    renderer: R,
}

impl<R: TemplateRenderer> RenderService<R> {
    /// Create a new service over a frozen route table.
    pub fn new(routes: RouteTable, renderer: R) -> Self {
        Self { routes, renderer }
    }

    /// The page routes this service serves.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Render the full page registered for `path`.
    ///
    /// Settings pages embed the panel fragment derived from their path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when `path` is not a registered page,
    /// or [`RenderError`] when the engine fails on the panel, the content
    /// template or the page shell.
    pub fn render_page(
        &self,
        path: &str,
        settings: &Arc<Settings>,
    ) -> Result<String, BirdviewError> {
        let mut context = match build_page_context(&self.routes, path, settings) {
            Ok(context) => context,
            Err(err) => {
                tracing::info!(path, error = %err, "page not found");
                return Err(err.into());
            }
        };

        if is_settings_path(&context.path) {
            let panel = self.render_fragment(&context.path, settings)?;
            context = context.with_extra(SETTINGS_CONTENT, ExtraField::Markup(panel));
        }

        let content = self.invoke(&context.template_name, &context)?;
        let shell = context.with_extra(CONTENT, ExtraField::Markup(content));
        self.invoke(PAGE_SHELL_TEMPLATE, &shell)
    }

    /// Render the settings panel for `path` without the page shell.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidFragmentPath`] when `path` is not a
    /// settings panel path, or [`RenderError`] when the engine fails.
    pub fn render_fragment(
        &self,
        path: &str,
        settings: &Arc<Settings>,
    ) -> Result<String, BirdviewError> {
        let context = match build_fragment_context(path, settings) {
            Ok(context) => context,
            Err(err) => {
                tracing::info!(path, error = %err, "fragment not found");
                return Err(err.into());
            }
        };
        self.invoke(&context.template_name, &context)
    }

    fn invoke(&self, template: &str, context: &RenderContext) -> Result<String, BirdviewError> {
        self.renderer.render(template, context).map_err(|err| {
            tracing::error!(
                path = %context.path,
                template,
                error = %err,
                "template rendering failed"
            );
            RenderError {
                path: context.path.clone(),
                template: template.to_string(),
                source: Box::new(err),
            }
            .into()
        })
    }
}

impl<R> std::fmt::Debug for RenderService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderService")
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}
