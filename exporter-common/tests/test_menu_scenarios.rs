mod support;

use crate::support::{mount_interactive, tracing_init};
use exporter_common::{
    CloseToken, Disclosure, EntryAction, ExportRequest, HoverEffect, MenuConfig, MenuMount,
    MetaSelection, PortalTarget, ViewportMode, MENU_ENTRIES,
};

/// Timer queue standing in for the UI runtime: applies effects the way the
/// view layer does (spawn on schedule, cancel on cancel) and fires due timers.
#[derive(Default)]
struct FakeTimers {
    now_ms: u64,
    pending: Vec<(CloseToken, u64)>,
}

impl FakeTimers {
    fn apply(&mut self, effect: HoverEffect) {
        match effect {
            HoverEffect::None => {}
            HoverEffect::ScheduleClose { token, delay_ms } => {
                self.pending.push((token, self.now_ms + delay_ms));
            }
            HoverEffect::CancelClose { token } => {
                self.pending.retain(|(t, _)| *t != token);
            }
        }
    }

    /// Advance the clock, firing due timers. Returns how many closed the panel.
    fn advance(&mut self, disclosure: &mut Disclosure, ms: u64) -> usize {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, at)| *at <= now);
        self.pending = rest;
        due.into_iter()
            .filter(|(token, _)| disclosure.close_elapsed(*token))
            .count()
    }
}

#[test]
fn trigger_opens_synchronously() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    let mut timers = FakeTimers::default();

    timers.apply(menu.activate_trigger());
    assert!(menu.is_open());
    assert!(menu.force_mount());
    assert!(timers.pending.is_empty());
}

#[test]
fn brief_excursion_keeps_panel_open() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    let mut timers = FakeTimers::default();
    timers.apply(menu.activate_trigger());

    for _ in 0..10 {
        timers.apply(menu.pointer_leave(timers.now_ms));
        assert_eq!(timers.advance(&mut menu, 150), 0);
        timers.apply(menu.pointer_enter());
        assert!(menu.is_open());
    }

    assert_eq!(timers.advance(&mut menu, 10_000), 0);
    assert!(menu.is_open());
}

#[test]
fn leaving_for_good_closes_exactly_once() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    let mut timers = FakeTimers::default();
    timers.apply(menu.activate_trigger());

    timers.apply(menu.pointer_leave(timers.now_ms));
    assert_eq!(timers.advance(&mut menu, 199), 0);
    assert!(menu.is_open());
    assert_eq!(timers.advance(&mut menu, 1), 1);
    assert!(!menu.is_open());
    assert_eq!(timers.advance(&mut menu, 1_000), 0);
}

#[test]
fn settings_dialog_survives_hover_close() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    let mut timers = FakeTimers::default();

    timers.apply(menu.activate_trigger());
    menu.set_dialog_open(true);
    timers.apply(menu.pointer_leave(timers.now_ms));
    assert_eq!(timers.advance(&mut menu, 500), 1);

    assert!(!menu.is_open());
    assert!(menu.force_mount());

    menu.set_dialog_open(false);
    assert!(!menu.is_open());
    assert!(!menu.force_mount());
}

#[test]
fn backdrop_tap_closes_without_delay() {
    tracing_init();
    let mut menu = mount_interactive(375.0);
    let mut timers = FakeTimers::default();
    assert_eq!(menu.mode(), ViewportMode::Mobile);

    timers.apply(menu.activate_trigger());
    assert!(menu.backdrop_visible());
    timers.apply(menu.tap_backdrop());

    assert!(!menu.is_open());
    assert!(!menu.backdrop_visible());
    assert!(timers.pending.is_empty());
}

#[test]
fn backdrop_tap_supersedes_pending_close() {
    tracing_init();
    let mut menu = mount_interactive(375.0);
    let mut timers = FakeTimers::default();

    timers.apply(menu.activate_trigger());
    timers.apply(menu.pointer_leave(timers.now_ms));
    assert_eq!(timers.pending.len(), 1);
    timers.apply(menu.tap_backdrop());
    assert!(timers.pending.is_empty());

    // Reopen; nothing from the earlier cycle may close it.
    timers.apply(menu.activate_trigger());
    assert_eq!(timers.advance(&mut menu, 1_000), 0);
    assert!(menu.is_open());
}

#[test]
fn disabled_host_renders_static_entry_only() {
    tracing_init();
    for width in [320.0, 1920.0] {
        let mount = MenuMount::new(true, width, &MenuConfig::default());
        assert_eq!(mount, MenuMount::Unavailable);
    }
}

#[test]
fn mode_is_fixed_at_mount() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    let before = menu.presentation().clone();

    // A later resize has no path into a mounted instance; a full open/close
    // cycle keeps the original layout.
    menu.activate_trigger();
    menu.tap_backdrop();
    menu.pointer_leave(0);
    menu.tick(1_000);

    assert_eq!(menu.presentation(), &before);
    assert_eq!(menu.presentation().portal, PortalTarget::OverlayLayer);
    assert!(!menu.presentation().backdrop);
}

#[test]
fn markdown_without_metadata_sends_empty_list() {
    let meta = MetaSelection::new(false, vec!["model".into()]);
    assert_eq!(
        EntryAction::Markdown.export_request("ChatGPT-{title}", &meta),
        Some(ExportRequest::Markdown {
            format: "ChatGPT-{title}".into(),
            meta_fields: vec![],
        })
    );
}

#[test]
fn html_with_metadata_sends_fields_in_order() {
    let meta = MetaSelection::new(true, vec!["model".into(), "timestamp".into()]);
    let Some(ExportRequest::Html { meta_fields, .. }) =
        EntryAction::Html.export_request("ChatGPT-{title}", &meta)
    else {
        panic!("expected html request");
    };
    assert_eq!(meta_fields, vec!["model", "timestamp"]);
}

#[test]
fn direct_entries_resolve_requests_without_touching_open_menu() {
    tracing_init();
    let mut menu = mount_interactive(1280.0);
    menu.activate_trigger();
    let before = menu.state();

    let meta = MetaSelection::default();
    let requests: Vec<_> = MENU_ENTRIES
        .iter()
        .filter_map(|entry| entry.action.export_request("{title}", &meta))
        .collect();

    assert_eq!(requests.len(), 5);
    assert_eq!(menu.state(), before);
}
