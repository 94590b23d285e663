//! Template rendering port.

use std::sync::Arc;

use crate::context::RenderContext;

/// Renders named templates.
///
/// The engine is a black box: it either produces the complete markup for
/// `name` or reports why it could not.
pub trait TemplateRenderer {
    /// Render the template called `name` with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when the template is unknown, the context
    /// lacks data the template needs, or the template fails while executing.
    fn render(&self, name: &str, context: &RenderContext) -> Result<String, TemplateError>;
}

impl<T: TemplateRenderer + ?Sized> TemplateRenderer for Arc<T> {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String, TemplateError> {
        (**self).render(name, context)
    }
}

/// Failures reported by a [`TemplateRenderer`].
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// No template is known under this name.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template needs an extra field the context does not carry.
    #[error("render context is missing field `{0}`")]
    MissingField(&'static str),

    /// The engine failed while executing the template.
    #[error("template execution failed: {0}")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_engine_message_in_execution_error() {
        let err = TemplateError::Execution("unknown filter `upper`".into());
        assert_eq!(
            err.to_string(),
            "template execution failed: unknown filter `upper`"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_name_missing_template() {
        let err = TemplateError::NotFound("bogusSettings".to_string());
        assert_eq!(err.to_string(), "template not found: bogusSettings");
    }
}
