//! Data preparers: pure functions turning settings into render-ready lists.

use std::collections::HashSet;

use birdview_domain::locale::LocaleEntry;
use birdview_domain::settings::Settings;
use birdview_domain::species::{PreparedSpecies, SpeciesEntry};

/// Locale entries for the language selector, in configured order.
///
/// Repeated codes keep their first position.
#[must_use]
pub fn prepare_locales(settings: &Settings) -> Vec<LocaleEntry> {
    let mut seen = HashSet::new();
    settings
        .locale
        .available
        .iter()
        .filter(|code| seen.insert(*code))
        .map(|code| LocaleEntry::from_code(code))
        .collect()
}

/// Species lists for the detection-filter and species panels.
#[must_use]
pub fn prepare_species(settings: &Settings) -> PreparedSpecies {
    let species = &settings.species;
    PreparedSpecies {
        include: species.include.clone(),
        exclude: species.exclude.clone(),
        // BTreeMap iteration is already sorted by name
        configured: species
            .config
            .iter()
            .map(|(name, config)| SpeciesEntry {
                name: name.clone(),
                threshold: config.threshold,
                interval: config.interval,
                actions: config.actions.clone(),
            })
            .collect(),
    }
}
