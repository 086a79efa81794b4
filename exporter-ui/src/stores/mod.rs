//! Store types for UI state management
//!
//! Preferences are supplied by the host when the menu mounts and edited from
//! the settings dialog. Each store derives `Store` for fine-grained reactivity
//! via lensing.

pub mod preferences;

pub use preferences::*;
