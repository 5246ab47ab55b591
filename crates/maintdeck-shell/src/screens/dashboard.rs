//! Dashboard landing screen
//!
//! Pure overview; navigations here carry no actionable params. No command
//! surface.

use maintdeck_core::{NavigationContext, ViewId};

use super::{ActionGate, Screen, ScreenStatus};

#[derive(Debug, Default)]
pub struct DashboardScreen {
    gate: ActionGate,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for DashboardScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Dashboard
    }

    fn on_navigation(&mut self, context: &NavigationContext) {
        // Nothing to interpret; consume the event so the gate state stays
        // consistent with the other screens.
        let _ = self.gate.admit(context);
    }

    fn status(&self) -> ScreenStatus {
        ScreenStatus::new(ViewId::Dashboard)
    }
}
