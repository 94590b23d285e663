//! Render context assembly.
//!
//! Two resolution policies live here:
//! - **pages** are resolved through the explicit [`RouteTable`];
//! - **fragments** (settings panels) derive their template name from the
//!   path shape: `/settings/<panel>` renders `<panel>Settings`.

use std::collections::BTreeMap;
use std::sync::Arc;

use birdview_domain::error::RouteError;
use birdview_domain::locale::LocaleEntry;
use birdview_domain::route::normalize_path;
use birdview_domain::settings::Settings;
use birdview_domain::species::PreparedSpecies;

use crate::preparers::{prepare_locales, prepare_species};
use crate::route_table::RouteTable;

/// Extra field carrying [`PreparedSpecies`] for the species-aware panels.
pub const PREPARED_SPECIES: &str = "PreparedSpecies";
/// Extra field carrying the rendered content template inside the page shell.
pub const CONTENT: &str = "Content";
/// Extra field carrying the rendered settings panel inside a settings page.
pub const SETTINGS_CONTENT: &str = "SettingsContent";

/// Path prefix shared by all settings panels.
pub const SETTINGS_PREFIX: &str = "/settings/";
/// Suffix appended to the panel name to form the fragment template name.
pub const FRAGMENT_SUFFIX: &str = "Settings";

/// Fragment templates that receive [`PREPARED_SPECIES`].
pub const SPECIES_PANELS: &[&str] = &["detectionfiltersSettings", "speciesSettings"];

/// Panel-specific data attached to a [`RenderContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraField {
    /// Already rendered markup, embedded verbatim.
    Markup(String),
    Species(PreparedSpecies),
}

/// Everything a template needs for one render call.
///
/// Built fresh for each request and never shared between requests.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub path: String,
    pub template_name: String,
    pub title: String,
    pub settings: Arc<Settings>,
    pub locales: Vec<LocaleEntry>,
    pub extra_fields: BTreeMap<String, ExtraField>,
}

impl RenderContext {
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&ExtraField> {
        self.extra_fields.get(key)
    }

    /// Markup stored under `key`, if that field holds markup.
    #[must_use]
    pub fn markup(&self, key: &str) -> Option<&str> {
        match self.extra(key)? {
            ExtraField::Markup(markup) => Some(markup),
            ExtraField::Species(_) => None,
        }
    }

    #[must_use]
    pub fn prepared_species(&self) -> Option<&PreparedSpecies> {
        match self.extra(PREPARED_SPECIES)? {
            ExtraField::Species(species) => Some(species),
            ExtraField::Markup(_) => None,
        }
    }

    /// Return a copy of this context extended with one more field.
    #[must_use]
    pub fn with_extra(mut self, key: &str, value: ExtraField) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }
}

/// Build the context of a full page.
///
/// # Errors
///
/// Returns [`RouteError::NotFound`] when `path` is not a registered page.
pub fn build_page_context(
    routes: &RouteTable,
    path: &str,
    settings: &Arc<Settings>,
) -> Result<RenderContext, RouteError> {
    let route = routes.resolve(path)?;
    Ok(RenderContext {
        path: route.path.clone(),
        template_name: route.template_name.clone(),
        title: route.title.clone(),
        settings: Arc::clone(settings),
        locales: prepare_locales(settings),
        extra_fields: BTreeMap::new(),
    })
}

/// Build the context of a settings fragment.
///
/// The route table is not consulted.
///
/// # Errors
///
/// Returns [`RouteError::InvalidFragmentPath`] when `path` does not name a
/// single settings panel.
pub fn build_fragment_context(
    path: &str,
    settings: &Arc<Settings>,
) -> Result<RenderContext, RouteError> {
    let path = normalize_path(path);
    let panel = settings_panel(&path)?;
    let template_name = format!("{panel}{FRAGMENT_SUFFIX}");

    let mut extra_fields = BTreeMap::new();
    if requires_species(&template_name) {
        extra_fields.insert(
            PREPARED_SPECIES.to_string(),
            ExtraField::Species(prepare_species(settings)),
        );
    }

    Ok(RenderContext {
        title: panel.to_string(),
        path,
        template_name,
        settings: Arc::clone(settings),
        locales: prepare_locales(settings),
        extra_fields,
    })
}

/// Derive the fragment template name for a settings path.
///
/// # Errors
///
/// Returns [`RouteError::InvalidFragmentPath`] when `path` is not of the
/// form `/settings/<panel>`.
pub fn fragment_template_name(path: &str) -> Result<String, RouteError> {
    let path = normalize_path(path);
    let panel = settings_panel(&path)?;
    Ok(format!("{panel}{FRAGMENT_SUFFIX}"))
}

/// Whether `path` lies under the settings prefix.
#[must_use]
pub fn is_settings_path(path: &str) -> bool {
    normalize_path(path).starts_with(SETTINGS_PREFIX)
}

/// Whether the fragment template is one of the [`SPECIES_PANELS`].
#[must_use]
pub fn requires_species(template_name: &str) -> bool {
    SPECIES_PANELS.contains(&template_name)
}

/// The panel named by an already normalized settings path.
///
/// Trailing slashes were trimmed by normalization, so `/settings/audio/`
/// names `audio`. A panel is exactly one segment: `/settings/a/b` names no
/// panel instead of deriving `a/bSettings`.
fn settings_panel(path: &str) -> Result<&str, RouteError> {
    match path.strip_prefix(SETTINGS_PREFIX) {
        Some(panel) if !panel.is_empty() && !panel.contains('/') => Ok(panel),
        _ => Err(RouteError::InvalidFragmentPath {
            path: path.to_string(),
        }),
    }
}
