//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BirdviewError`] via `#[from]`.

/// Top-level error returned by the rendering use-cases.
#[derive(Debug, thiserror::Error)]
pub enum BirdviewError {
    #[error("route error")]
    Route(#[from] RouteError),

    #[error("render error")]
    Render(#[from] RenderError),
}

impl BirdviewError {
    /// Whether the error should be surfaced to a client as "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Route(RouteError::NotFound { .. } | RouteError::InvalidFragmentPath { .. })
        )
    }
}

/// Errors raised while registering or resolving routes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Two routes were registered for the same normalized path.
    #[error("route already registered for path: {path}")]
    Duplicate { path: String },

    /// No page route matches the requested path.
    #[error("no route found for path: {path}")]
    NotFound { path: String },

    /// The path does not name a settings panel.
    #[error("not a settings fragment path: {path}")]
    InvalidFragmentPath { path: String },
}

/// The template engine failed to produce markup.
#[derive(Debug, thiserror::Error)]
#[error("failed to render template `{template}` for path {path}")]
pub struct RenderError {
    /// Request path that triggered the render.
    pub path: String,
    /// Name of the template that was attempted.
    pub template: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// Semantic problems found in a settings snapshot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("no locales configured")]
    NoLocales,

    #[error("active locale `{0}` is not among the configured locales")]
    UnknownActiveLocale(String),

    #[error("threshold for {scope} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { scope: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_route_not_found_with_path() {
        let err = RouteError::NotFound {
            path: "/missing".to_string(),
        };
        assert_eq!(err.to_string(), "no route found for path: /missing");
    }

    #[test]
    fn should_include_template_name_in_render_error() {
        let err = RenderError {
            path: "/settings/audio".to_string(),
            template: "audioSettings".to_string(),
            source: "boom".into(),
        };
        assert!(err.to_string().contains("audioSettings"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_classify_not_found_errors() {
        let not_found: BirdviewError = RouteError::NotFound {
            path: "/x".to_string(),
        }
        .into();
        let invalid: BirdviewError = RouteError::InvalidFragmentPath {
            path: "/x".to_string(),
        }
        .into();
        let duplicate: BirdviewError = RouteError::Duplicate {
            path: "/x".to_string(),
        }
        .into();

        assert!(not_found.is_not_found());
        assert!(invalid.is_not_found());
        assert!(!duplicate.is_not_found());
    }
}
