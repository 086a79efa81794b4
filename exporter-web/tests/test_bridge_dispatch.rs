mod support;

use exporter_common::{EntryAction, MENU_ENTRIES};
use exporter_web::host::{bridge_args, bridge_function, parse_preferences, BridgeArg};

use crate::support::tracing_init;

#[test]
fn every_direct_entry_reaches_its_bridge_function() {
    tracing_init();

    let prefs = parse_preferences(
        r#"{"format":"{date}-{title}","enableMeta":true,"metaFields":["model","date"]}"#,
    )
    .unwrap();
    let meta = prefs.meta_selection();

    let dispatched: Vec<(&str, &str)> = MENU_ENTRIES
        .iter()
        .filter_map(|entry| {
            let request = entry.action.export_request(&prefs.format, &meta)?;
            Some((entry.label, bridge_function(&request)))
        })
        .collect();

    assert_eq!(
        dispatched,
        vec![
            ("Copy Text", "exportToText"),
            ("Screenshot", "exportToPng"),
            ("Markdown", "exportToMarkdown"),
            ("HTML", "exportToHtml"),
            ("JSON", "exportToJson"),
        ]
    );
}

#[test]
fn markdown_carries_stored_preferences() {
    tracing_init();

    let prefs = parse_preferences(
        r#"{"format":"{title}","enableMeta":true,"metaFields":["model"]}"#,
    )
    .unwrap();
    let request = EntryAction::Markdown
        .export_request(&prefs.format, &prefs.meta_selection())
        .unwrap();

    assert_eq!(
        bridge_args(&request),
        vec![
            BridgeArg::Text("{title}".into()),
            BridgeArg::List(vec!["model".into()]),
        ]
    );
}

#[test]
fn disabled_metadata_sends_empty_field_list() {
    tracing_init();

    let prefs = parse_preferences(r#"{"enableMeta":false,"metaFields":["model"]}"#).unwrap();
    let request = EntryAction::Html
        .export_request(&prefs.format, &prefs.meta_selection())
        .unwrap();

    assert_eq!(
        bridge_args(&request),
        vec![
            BridgeArg::Text("ChatGPT-{title}".into()),
            BridgeArg::List(vec![]),
        ]
    );
}

#[test]
fn malformed_preferences_are_rejected() {
    tracing_init();
    assert!(parse_preferences("{\"format\": 3}").is_err());
}
