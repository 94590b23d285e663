//! Render-ready species views for the filtering panels.

use serde::{Deserialize, Serialize};

/// One species with its custom detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    /// Custom confidence threshold, if any.
    pub threshold: Option<f64>,
    /// Minimum seconds between two reported detections, if any.
    pub interval: Option<u32>,
    pub actions: Vec<String>,
}

/// Species data consumed by the detection-filter and species panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreparedSpecies {
    /// Species always reported, in configured order.
    pub include: Vec<String>,
    /// Species never reported, in configured order.
    pub exclude: Vec<String>,
    /// Species with custom configuration, sorted by name.
    pub configured: Vec<SpeciesEntry>,
}

impl PreparedSpecies {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty() && self.configured.is_empty()
    }
}
