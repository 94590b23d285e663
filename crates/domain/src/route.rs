//! Route descriptors: the mapping from a top-level URL path to a content
//! template and page title.

use serde::{Deserialize, Serialize};

/// A registered page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Normalized request path, unique within a route table.
    pub path: String,
    /// Name of the content template rendered inside the page shell.
    pub template_name: String,
    /// Human-readable page title.
    pub title: String,
}

impl RouteDescriptor {
    /// Create a descriptor; `path` is normalized with [`normalize_path`].
    #[must_use]
    pub fn new(
        path: impl AsRef<str>,
        template_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            template_name: template_name.into(),
            title: title.into(),
        }
    }
}

/// Normalize a request path for exact-match lookups.
///
/// Ensures a leading `/` and strips trailing slashes, except for the root.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
