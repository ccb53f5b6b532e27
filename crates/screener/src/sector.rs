// In crates/screener/src/sector.rs

use crate::types::SectorSettings;
use std::collections::HashMap;

/// Maps raw sector identifiers to display labels. Matching ignores case.
#[derive(Debug, Clone)]
pub struct SectorLookup {
    labels: HashMap<String, String>,
    unknown_label: String,
}

impl SectorLookup {
    pub fn new(settings: &SectorSettings) -> Self {
        Self {
            labels: settings
                .labels
                .iter()
                .map(|(raw, label)| (raw.to_lowercase(), label.clone()))
                .collect(),
            unknown_label: settings.unknown_label.clone(),
        }
    }

    /// Display label for `raw`.
    ///
    /// Missing or blank identifiers get the unknown label. Identifiers without
    /// a translation are shown as they are.
    pub fn label(&self, raw: Option<&str>) -> String {
        match raw.map(str::trim) {
            None | Some("") => self.unknown_label.clone(),
            Some(sector) => self
                .labels
                .get(&sector.to_lowercase())
                .cloned()
                .unwrap_or_else(|| sector.to_string()),
        }
    }
}

impl Default for SectorLookup {
    fn default() -> Self {
        Self::new(&SectorSettings::default())
    }
}
