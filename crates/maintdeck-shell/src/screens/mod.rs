//! Screen consumer contract and the per-view screens
//!
//! Screens hold only view-local coordination state (open modal, highlight,
//! filters); domain records and rendering belong to their own layers. Each
//! screen interprets the navigation params delivered for its view and, when
//! asked, exposes the imperative create command.

mod calendar;
mod categories;
mod dashboard;
mod equipment;
mod maintenance;
mod reporting;
mod teams;

pub use calendar::CalendarScreen;
pub use categories::CategoriesScreen;
pub use dashboard::DashboardScreen;
pub use equipment::EquipmentScreen;
pub use maintenance::{team_from_return, AssignmentSlot, MaintenanceScreen};
pub use reporting::ReportingScreen;
pub use teams::TeamsScreen;

use serde::Serialize;

use maintdeck_core::{NavigationContext, ViewId};
use maintdeck_nav::ViewCommands;

/// A mounted view, as the shell sees it.
pub trait Screen: Send {
    /// Which view this screen renders.
    fn view_id(&self) -> ViewId;

    /// React to a navigation event targeting this view.
    ///
    /// Must trigger one-shot actions (the creation flow) exactly once per
    /// distinct navigation event; redelivery of the same context is a
    /// re-render and must be ignored. See [`ActionGate`].
    fn on_navigation(&mut self, context: &NavigationContext);

    /// Command surface, for views that support shell-driven creation.
    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        None
    }

    /// Snapshot of the screen's coordination state, for diagnostics.
    fn status(&self) -> ScreenStatus;
}

/// Modal a screen currently has open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum ScreenModal {
    Create,
    Edit(String),
}

/// Serializable summary of one screen's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenStatus {
    pub view: ViewId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ScreenModal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,
    /// Screen-specific state (e.g. the maintenance view's pending team
    /// assignment).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ScreenStatus {
    pub fn new(view: ViewId) -> Self {
        Self {
            view,
            modal: None,
            focused_id: None,
            highlight_id: None,
            filters: Vec::new(),
            detail: None,
        }
    }
}

/// Remembers the last navigation event a screen consumed.
///
/// Redelivery of an already-consumed context (a re-render) is admitted
/// exactly zero times, so one-shot actions fire once per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionGate {
    last_sequence: Option<u64>,
}

impl ActionGate {
    /// True exactly once per distinct navigation event.
    pub fn admit(&mut self, context: &NavigationContext) -> bool {
        if self.last_sequence == Some(context.sequence) {
            return false;
        }
        self.last_sequence = Some(context.sequence);
        true
    }
}
