//! Typed template views built from a [`RenderContext`].

use askama::Template;

use birdview_app::context::{CONTENT, PREPARED_SPECIES, RenderContext, SETTINGS_CONTENT};
use birdview_app::ports::TemplateError;
use birdview_domain::species::SpeciesEntry;

/// One `<option>` of the language selector.
pub struct LocaleOption<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub selected: bool,
}

fn locale_options(context: &RenderContext) -> Vec<LocaleOption<'_>> {
    let active = context.settings.locale.active.as_str();
    context
        .locales
        .iter()
        .map(|locale| LocaleOption {
            code: &locale.code,
            name: &locale.name,
            selected: locale.code == active,
        })
        .collect()
}

fn markup<'a>(context: &'a RenderContext, key: &'static str) -> Result<&'a str, TemplateError> {
    context.markup(key).ok_or(TemplateError::MissingField(key))
}

/// Page shell wrapping every full page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView<'a> {
    title: &'a str,
    page: &'a str,
    active_locale: &'a str,
    locales: Vec<LocaleOption<'a>>,
    content: &'a str,
}

impl<'a> IndexView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Result<Self, TemplateError> {
        Ok(Self {
            title: &context.title,
            page: &context.template_name,
            active_locale: &context.settings.locale.active,
            locales: locale_options(context),
            content: markup(context, CONTENT)?,
        })
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardView<'a> {
    summary_limit: u32,
    summary_thumbnails: bool,
    recent_thumbnails: bool,
    image_provider: &'a str,
}

impl<'a> DashboardView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        let dashboard = &context.settings.dashboard;
        Self {
            summary_limit: dashboard.summary_limit,
            summary_thumbnails: dashboard.thumbnails.summary,
            recent_thumbnails: dashboard.thumbnails.recent,
            image_provider: &dashboard.thumbnails.image_provider,
        }
    }
}

#[derive(Template)]
#[template(path = "logs.html")]
pub struct LogsView<'a> {
    title: &'a str,
}

impl<'a> LogsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        Self {
            title: &context.title,
        }
    }
}

#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsView<'a> {
    title: &'a str,
    latitude: f64,
    longitude: f64,
}

impl<'a> StatsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        Self {
            title: &context.title,
            latitude: context.settings.birdnet.latitude,
            longitude: context.settings.birdnet.longitude,
        }
    }
}

/// Frame shared by all settings pages; the panel arrives pre-rendered.
#[derive(Template)]
#[template(path = "settings/base.html")]
pub struct SettingsBaseView<'a> {
    title: &'a str,
    path: &'a str,
    panel: &'a str,
}

impl<'a> SettingsBaseView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Result<Self, TemplateError> {
        Ok(Self {
            title: &context.title,
            path: &context.path,
            panel: markup(context, SETTINGS_CONTENT)?,
        })
    }
}

#[derive(Template)]
#[template(path = "settings/main.html")]
pub struct MainSettingsView<'a> {
    threshold: f64,
    sensitivity: f64,
    latitude: f64,
    longitude: f64,
    locales: Vec<LocaleOption<'a>>,
}

impl<'a> MainSettingsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        let birdnet = &context.settings.birdnet;
        Self {
            threshold: birdnet.threshold,
            sensitivity: birdnet.sensitivity,
            latitude: birdnet.latitude,
            longitude: birdnet.longitude,
            locales: locale_options(context),
        }
    }
}

#[derive(Template)]
#[template(path = "settings/audio.html")]
pub struct AudioSettingsView<'a> {
    source: &'a str,
    export_enabled: bool,
    export_path: &'a str,
    export_format: &'a str,
}

impl<'a> AudioSettingsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        let audio = &context.settings.audio;
        Self {
            source: &audio.source,
            export_enabled: audio.export.enabled,
            export_path: &audio.export.path,
            export_format: &audio.export.format,
        }
    }
}

#[derive(Template)]
#[template(path = "settings/dashboard.html")]
pub struct DashboardSettingsView<'a> {
    summary_limit: u32,
    summary_thumbnails: bool,
    recent_thumbnails: bool,
    image_provider: &'a str,
}

impl<'a> DashboardSettingsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Self {
        let dashboard = &context.settings.dashboard;
        Self {
            summary_limit: dashboard.summary_limit,
            summary_thumbnails: dashboard.thumbnails.summary,
            recent_thumbnails: dashboard.thumbnails.recent,
            image_provider: &dashboard.thumbnails.image_provider,
        }
    }
}

#[derive(Template)]
#[template(path = "settings/detectionfilters.html")]
pub struct DetectionFiltersView<'a> {
    threshold: f64,
    include: Vec<&'a str>,
    exclude: Vec<&'a str>,
}

impl<'a> DetectionFiltersView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Result<Self, TemplateError> {
        let species = context
            .prepared_species()
            .ok_or(TemplateError::MissingField(PREPARED_SPECIES))?;
        Ok(Self {
            threshold: context.settings.birdnet.threshold,
            include: species.include.iter().map(String::as_str).collect(),
            exclude: species.exclude.iter().map(String::as_str).collect(),
        })
    }
}

/// A configured species, pre-formatted for the table.
pub struct SpeciesRow<'a> {
    pub name: &'a str,
    pub threshold: String,
    pub interval: String,
    pub actions: String,
}

impl<'a> From<&'a SpeciesEntry> for SpeciesRow<'a> {
    fn from(entry: &'a SpeciesEntry) -> Self {
        Self {
            name: &entry.name,
            threshold: entry
                .threshold
                .map_or_else(|| "default".to_string(), |value| value.to_string()),
            interval: entry
                .interval
                .map_or_else(|| "default".to_string(), |secs| format!("{secs}s")),
            actions: entry.actions.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "settings/species.html")]
pub struct SpeciesSettingsView<'a> {
    rows: Vec<SpeciesRow<'a>>,
}

impl<'a> SpeciesSettingsView<'a> {
    pub fn from_context(context: &'a RenderContext) -> Result<Self, TemplateError> {
        let species = context
            .prepared_species()
            .ok_or(TemplateError::MissingField(PREPARED_SPECIES))?;
        Ok(Self {
            rows: species.configured.iter().map(SpeciesRow::from).collect(),
        })
    }
}
