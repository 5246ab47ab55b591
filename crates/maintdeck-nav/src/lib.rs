//! # maintdeck-nav - Navigation and View Coordination
//!
//! The process-wide view coordination layer for Maintdeck: any view can
//! request a transition to any other view, attach structured parameters,
//! and optionally receive a result when the destination is later dismissed.
//!
//! ## Public API
//!
//! ### Router (`router`)
//! - [`Router`] - Single source of truth for the active view and history
//! - [`NavigationRequest`] - One transition request
//! - [`OnReturn`] - Result callback restored by `go_back`
//!
//! ### Subscriptions (`registry`)
//! - [`Subscription`] - RAII guard for a registered observer
//!
//! ### Consumer façade (`binding`)
//! - [`ViewBinding`] - Read model plus typed request builders
//!
//! ### Commands (`command`)
//! - [`ViewCommands`] - Direct "open your create form" handle
//!
//! ## Ordering guarantees
//!
//! Observers are notified synchronously in registration order. A `go_back`
//! return callback runs before the notification loop for the restored
//! context. Requests issued from inside an observer are queued and run
//! after the in-flight loop completes; events are never dropped and never
//! interleaved.

pub mod binding;
pub mod command;
pub mod registry;
pub mod router;

// Re-export primary types
pub use binding::ViewBinding;
pub use command::ViewCommands;
pub use registry::Subscription;
pub use router::{NavigationRequest, OnReturn, Router};
