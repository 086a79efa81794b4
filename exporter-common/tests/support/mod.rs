use exporter_common::{Disclosure, MenuConfig, MenuMount};

pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Mount an interactive menu at the given viewport width
pub fn mount_interactive(width_px: f64) -> Disclosure {
    match MenuMount::new(false, width_px, &MenuConfig::default()) {
        MenuMount::Interactive(disclosure) => disclosure,
        MenuMount::Unavailable => panic!("menu unexpectedly unavailable"),
    }
}
