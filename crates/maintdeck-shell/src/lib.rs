//! # maintdeck-shell - Hosting Shell
//!
//! Binds the navigation layer to mounted screens: maps the active view to
//! a screen, interprets delivered navigation params (create/edit/view,
//! highlights, filters), relays the shell-level "New" button through the
//! imperative command surface, and runs the pick-a-team return flow.
//!
//! Screens hold coordination state only. Domain records and rendering live
//! outside this crate.

pub mod config;
pub mod screens;
pub mod shell;

// Re-export primary types
pub use config::{load_config, load_config_file, ShellConfig};
pub use screens::{Screen, ScreenModal, ScreenStatus};
pub use shell::{Shell, ShellStatus};
