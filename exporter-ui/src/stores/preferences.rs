//! Export format and metadata preferences

use dioxus::prelude::*;
use exporter_common::MetaSelection;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMAT: &str = "ChatGPT-{title}";

/// Preferences read by the export actions.
///
/// `format` is opaque to the menu and handed to the exporters unchanged.
#[derive(Clone, Debug, PartialEq, Store, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportPreferences {
    pub format: String,
    /// Whether metadata fields are included in Markdown/HTML exports
    pub enable_meta: bool,
    /// Metadata field identifiers, in export order
    pub meta_fields: Vec<String>,
}

impl Default for ExportPreferences {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            enable_meta: false,
            meta_fields: Vec::new(),
        }
    }
}

impl ExportPreferences {
    pub fn meta_selection(&self) -> MetaSelection {
        MetaSelection::new(self.enable_meta, self.meta_fields.clone())
    }
}

/// Snapshot the store for an export request.
pub fn read_preferences(prefs: Store<ExportPreferences>) -> ExportPreferences {
    ExportPreferences {
        format: prefs.format().read().clone(),
        enable_meta: *prefs.enable_meta().read(),
        meta_fields: prefs.meta_fields().read().clone(),
    }
}

/// Parse the comma-separated field list typed into the settings dialog.
pub fn parse_meta_fields(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
