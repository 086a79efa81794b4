//! Static catalog of export menu entries

use crate::export::{ExportRequest, MetaSelection};

pub const TRIGGER_LABEL: &str = "Export";

pub const UNAVAILABLE_LABEL: &str = "Exporter unavailable";

pub const UNAVAILABLE_TITLE: &str = "Exporter is relying on the History API.\n\
But History feature is disabled by OpenAI temporarily.\n\
We all have to wait for them to bring it back.";

/// Grid column span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryWidth {
    Full,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIcon {
    Settings,
    Copy,
    Camera,
    Markdown,
    FileCode,
    Json,
    Archive,
}

/// Nested dialogs that report their visibility back to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Settings,
    ExportAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryAction {
    OpenSettings,
    CopyText,
    Screenshot,
    Markdown,
    Html,
    Json,
    OpenExportAll,
}

impl EntryAction {
    /// Dialog this entry opens, if it opens one instead of exporting.
    pub fn dialog(self) -> Option<DialogKind> {
        match self {
            Self::OpenSettings => Some(DialogKind::Settings),
            Self::OpenExportAll => Some(DialogKind::ExportAll),
            _ => None,
        }
    }

    /// Resolve the collaborator call for this entry against the current preferences.
    pub fn export_request(self, format: &str, meta: &MetaSelection) -> Option<ExportRequest> {
        let format = format.to_string();
        match self {
            Self::CopyText => Some(ExportRequest::Text),
            Self::Screenshot => Some(ExportRequest::Image { format }),
            Self::Markdown => Some(ExportRequest::Markdown {
                format,
                meta_fields: meta.resolved(),
            }),
            Self::Html => Some(ExportRequest::Html {
                format,
                meta_fields: meta.resolved(),
            }),
            Self::Json => Some(ExportRequest::Json { format }),
            Self::OpenSettings | Self::OpenExportAll => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: EntryIcon,
    pub width: EntryWidth,
    pub action: EntryAction,
    /// Shown in place of the label for a short while after the action succeeds
    pub success_text: Option<&'static str>,
}

impl MenuEntry {
    const fn new(
        label: &'static str,
        icon: EntryIcon,
        width: EntryWidth,
        action: EntryAction,
    ) -> Self {
        Self {
            label,
            icon,
            width,
            action,
            success_text: None,
        }
    }

    const fn with_success(mut self, text: &'static str) -> Self {
        self.success_text = Some(text);
        self
    }
}

/// Entries in render order
pub const MENU_ENTRIES: [MenuEntry; 7] = [
    MenuEntry::new(
        "Setting",
        EntryIcon::Settings,
        EntryWidth::Full,
        EntryAction::OpenSettings,
    ),
    MenuEntry::new(
        "Copy Text",
        EntryIcon::Copy,
        EntryWidth::Full,
        EntryAction::CopyText,
    )
    .with_success("Copied!"),
    MenuEntry::new(
        "Screenshot",
        EntryIcon::Camera,
        EntryWidth::Half,
        EntryAction::Screenshot,
    ),
    MenuEntry::new(
        "Markdown",
        EntryIcon::Markdown,
        EntryWidth::Half,
        EntryAction::Markdown,
    ),
    MenuEntry::new("HTML", EntryIcon::FileCode, EntryWidth::Half, EntryAction::Html),
    MenuEntry::new("JSON", EntryIcon::Json, EntryWidth::Half, EntryAction::Json),
    MenuEntry::new(
        "Export All",
        EntryIcon::Archive,
        EntryWidth::Full,
        EntryAction::OpenExportAll,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(enabled: bool) -> MetaSelection {
        MetaSelection::new(enabled, vec!["model".into(), "timestamp".into()])
    }

    #[test]
    fn catalog_order_and_layout() {
        let layout: Vec<_> = MENU_ENTRIES.iter().map(|e| (e.label, e.width)).collect();
        assert_eq!(
            layout,
            vec![
                ("Setting", EntryWidth::Full),
                ("Copy Text", EntryWidth::Full),
                ("Screenshot", EntryWidth::Half),
                ("Markdown", EntryWidth::Half),
                ("HTML", EntryWidth::Half),
                ("JSON", EntryWidth::Half),
                ("Export All", EntryWidth::Full),
            ]
        );
    }

    #[test]
    fn only_copy_text_has_success_feedback() {
        let with_feedback: Vec<_> = MENU_ENTRIES
            .iter()
            .filter_map(|e| e.success_text.map(|t| (e.action, t)))
            .collect();
        assert_eq!(with_feedback, vec![(EntryAction::CopyText, "Copied!")]);
    }

    #[test]
    fn dialog_entries_do_not_export() {
        for action in [EntryAction::OpenSettings, EntryAction::OpenExportAll] {
            assert!(action.dialog().is_some());
            assert_eq!(action.export_request("{title}", &meta(true)), None);
        }
        assert_eq!(EntryAction::Json.dialog(), None);
    }

    #[test]
    fn copy_text_takes_no_parameters() {
        assert_eq!(
            EntryAction::CopyText.export_request("{title}", &meta(true)),
            Some(ExportRequest::Text)
        );
    }

    #[test]
    fn format_only_exports_ignore_metadata() {
        assert_eq!(
            EntryAction::Screenshot.export_request("{title}", &meta(true)),
            Some(ExportRequest::Image {
                format: "{title}".into()
            })
        );
        assert_eq!(
            EntryAction::Json.export_request("{title}", &meta(true)),
            Some(ExportRequest::Json {
                format: "{title}".into()
            })
        );
    }

    #[test]
    fn markdown_with_metadata_disabled_gets_empty_list() {
        assert_eq!(
            EntryAction::Markdown.export_request("{title}", &meta(false)),
            Some(ExportRequest::Markdown {
                format: "{title}".into(),
                meta_fields: vec![],
            })
        );
    }

    #[test]
    fn html_with_metadata_enabled_gets_fields_in_order() {
        assert_eq!(
            EntryAction::Html.export_request("{title}", &meta(true)),
            Some(ExportRequest::Html {
                format: "{title}".into(),
                meta_fields: vec!["model".into(), "timestamp".into()],
            })
        );
    }
}
