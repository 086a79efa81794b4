//! Export requests handed to the host's export routines

use thiserror::Error;

/// Metadata inclusion as supplied by the preference provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaSelection {
    pub enabled: bool,
    pub fields: Vec<String>,
}

impl MetaSelection {
    pub fn new(enabled: bool, fields: Vec<String>) -> Self {
        Self { enabled, fields }
    }

    /// Field list to pass to exporters: the selection in order, or empty when disabled.
    pub fn resolved(&self) -> Vec<String> {
        if self.enabled {
            self.fields.clone()
        } else {
            Vec::new()
        }
    }
}

/// One call into an export collaborator, with its parameters already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRequest {
    Text,
    Image { format: String },
    Markdown { format: String, meta_fields: Vec<String> },
    Html { format: String, meta_fields: Vec<String> },
    Json { format: String },
    All { format: String },
}

impl ExportRequest {
    /// Short name used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image { .. } => "image",
            Self::Markdown { .. } => "markdown",
            Self::Html { .. } => "html",
            Self::Json { .. } => "json",
            Self::All { .. } => "all",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("export bridge is not available on this page")]
    BridgeUnavailable,
    #[error("{kind} export failed: {message}")]
    Failed { kind: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_selection_resolves_empty() {
        let meta = MetaSelection::new(false, vec!["model".into(), "timestamp".into()]);
        assert!(meta.resolved().is_empty());
    }

    #[test]
    fn enabled_selection_preserves_order() {
        let meta = MetaSelection::new(true, vec!["timestamp".into(), "model".into()]);
        assert_eq!(meta.resolved(), vec!["timestamp", "model"]);
    }

    #[test]
    fn error_messages_name_the_export() {
        let err = ExportError::Failed {
            kind: "html",
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "html export failed: quota exceeded");
    }
}
