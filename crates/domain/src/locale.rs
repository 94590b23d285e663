//! Locale entries shown in the dashboard's language selector.

use serde::{Deserialize, Serialize};

/// A locale code paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub code: String,
    pub name: String,
}

impl LocaleEntry {
    /// Build an entry for `code`, using the known display name when there
    /// is one and the code itself otherwise.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: locale_name(code).unwrap_or(code).to_string(),
        }
    }
}

/// Display names for the locale codes the species label files ship with.
const LOCALE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("uk", "Ukrainian"),
    ("zh", "Chinese"),
];

/// Look up the display name of a locale code (case-sensitive).
///
/// `LOCALE_NAMES` must stay sorted by code.
#[must_use]
pub fn locale_name(code: &str) -> Option<&'static str> {
    LOCALE_NAMES
        .binary_search_by_key(&code, |&(known, _)| known)
        .ok()
        .map(|index| LOCALE_NAMES[index].1)
}
