//! Page route table: explicit mapping from top-level paths to content
//! templates and titles.
//!
//! Routes are registered on a [`RouteTableBuilder`] during startup and then
//! [frozen](RouteTableBuilder::freeze) into a [`RouteTable`]. The frozen
//! table has no mutation API, so it can be shared across request handlers
//! without locking.

use std::collections::HashMap;

use birdview_domain::error::RouteError;
use birdview_domain::route::{RouteDescriptor, normalize_path};

/// Mutable route table used during startup.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<RouteDescriptor>,
    index: HashMap<String, usize>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] if the normalized path is already
    /// registered. The table is left unchanged in that case.
    pub fn register(
        &mut self,
        path: &str,
        template_name: &str,
        title: &str,
    ) -> Result<&mut Self, RouteError> {
        let route = RouteDescriptor::new(path, template_name, title);
        if self.index.contains_key(&route.path) {
            return Err(RouteError::Duplicate { path: route.path });
        }
        self.index.insert(route.path.clone(), self.routes.len());
        self.routes.push(route);
        Ok(self)
    }

    /// Stop accepting registrations.
    #[must_use]
    pub fn freeze(self) -> RouteTable {
        tracing::debug!(routes = self.routes.len(), "route table frozen");
        RouteTable {
            routes: self.routes,
            index: self.index,
        }
    }
}

/// Immutable route table consulted on every page request.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Look up the route registered for `path` (after normalization).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] when no route matches exactly.
    pub fn resolve(&self, path: &str) -> Result<&RouteDescriptor, RouteError> {
        let path = normalize_path(path);
        match self.index.get(&path) {
            Some(&position) => Ok(&self.routes[position]),
            None => Err(RouteError::NotFound { path }),
        }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(&normalize_path(path))
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Template rendered for every settings page; the panel itself is a fragment.
pub const SETTINGS_BASE_TEMPLATE: &str = "settingsBase";

/// Register the dashboard's top-level navigation.
///
/// # Errors
///
/// Returns [`RouteError::Duplicate`] if the list below ever names a path twice.
pub fn default_routes() -> Result<RouteTableBuilder, RouteError> {
    let mut builder = RouteTableBuilder::new();
    builder
        .register("/", "dashboard", "Dashboard")?
        .register("/dashboard", "dashboard", "Dashboard")?
        .register("/logs", "logs", "Logs")?
        .register("/stats", "stats", "Statistics")?
        .register("/settings/main", SETTINGS_BASE_TEMPLATE, "Main Settings")?
        .register("/settings/audio", SETTINGS_BASE_TEMPLATE, "Audio Capture Settings")?
        .register("/settings/dashboard", SETTINGS_BASE_TEMPLATE, "Dashboard Settings")?
        .register(
            "/settings/detectionfilters",
            SETTINGS_BASE_TEMPLATE,
            "Detection Filters Settings",
        )?
        .register("/settings/species", SETTINGS_BASE_TEMPLATE, "Species Settings")?;
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteTable {
        let mut builder = RouteTableBuilder::new();
        builder
            .register("/", "dashboard", "Dashboard")
            .unwrap()
            .register("/logs", "logs", "Logs")
            .unwrap();
        builder.freeze()
    }

    #[test]
    fn should_resolve_registered_route_to_exact_descriptor() {
        let table = sample();
        let route = table.resolve("/logs").unwrap();
        assert_eq!(route, &RouteDescriptor::new("/logs", "logs", "Logs"));
    }

    #[test]
    fn should_resolve_after_normalizing_path() {
        let table = sample();
        assert_eq!(table.resolve("/logs/").unwrap().template_name, "logs");
        assert_eq!(table.resolve("").unwrap().template_name, "dashboard");
    }

    #[test]
    fn should_return_not_found_for_unregistered_path() {
        let table = sample();
        assert_eq!(
            table.resolve("/stats"),
            Err(RouteError::NotFound {
                path: "/stats".to_string()
            })
        );
    }

    #[test]
    fn should_not_match_prefixes_or_case_variants() {
        let table = sample();
        assert!(table.resolve("/logs/today").is_err());
        assert!(table.resolve("/LOGS").is_err());
    }

    #[test]
    fn should_reject_duplicate_and_keep_table_unchanged() {
        let mut builder = RouteTableBuilder::new();
        builder.register("/logs", "logs", "Logs").unwrap();

        let err = builder.register("/logs/", "other", "Other").unwrap_err();
        assert_eq!(
            err,
            RouteError::Duplicate {
                path: "/logs".to_string()
            }
        );

        let table = builder.freeze();
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("/logs").unwrap().title, "Logs");
    }

    #[test]
    fn should_iterate_in_registration_order() {
        let table = sample();
        let paths: Vec<&str> = table.iter().map(|route| route.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/logs"]);
    }

    #[test]
    fn should_register_default_routes() {
        let table = default_routes().unwrap().freeze();
        assert!(!table.is_empty());
        assert!(table.contains("/"));
        assert!(table.contains("/settings/species"));
        assert_eq!(
            table.resolve("/settings/audio").unwrap().template_name,
            SETTINGS_BASE_TEMPLATE
        );
    }
}
