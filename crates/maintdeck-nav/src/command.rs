//! Imperative command surface
//!
//! A narrow side-channel that lets the hosting shell tell the currently
//! mounted view to perform an action without going through the navigation
//! protocol. The shell holds one handle per view and calls the one matching
//! the active tab; this is a direct call, not a broadcast.

/// Command handle exposed by a view that supports shell-driven creation.
///
/// Deep links reach the same flow through the read model
/// (`ViewAction::Create` on the delivered params); both paths must end up
/// performing the identical action.
pub trait ViewCommands {
    /// Open the view's creation form.
    fn open_create_modal(&mut self);
}
