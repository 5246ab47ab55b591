//! Maintenance calendar screen

use maintdeck_core::{NavigationContext, ViewAction, ViewId};
use maintdeck_nav::ViewCommands;

use super::{ActionGate, Screen, ScreenModal, ScreenStatus};

/// Coordination state for the calendar.
///
/// The calendar has no entity of its own; a create action schedules a new
/// maintenance request from the selected day, so it supports the command
/// surface like the list views do.
#[derive(Debug, Default)]
pub struct CalendarScreen {
    gate: ActionGate,
    modal: Option<ScreenModal>,
    highlight: Option<String>,
}

impl CalendarScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Option<&ScreenModal> {
        self.modal.as_ref()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

impl ViewCommands for CalendarScreen {
    fn open_create_modal(&mut self) {
        self.modal = Some(ScreenModal::Create);
    }
}

impl Screen for CalendarScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Calendar
    }

    fn on_navigation(&mut self, context: &NavigationContext) {
        if !self.gate.admit(context) {
            return;
        }
        let Some(params) = context.params.as_ref() else {
            return;
        };

        if params.highlight_id.is_some() {
            self.highlight = params.highlight_id.clone();
        }
        if params.action == Some(ViewAction::Create) {
            self.open_create_modal();
        }
    }

    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        Some(self)
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::Calendar);
        status.modal = self.modal.clone();
        status.highlight_id = self.highlight.clone();
        status
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use maintdeck_core::NavigationParams;

    #[test]
    fn test_create_opens_schedule_modal() {
        let mut screen = CalendarScreen::new();
        screen.on_navigation(&context(
            ViewId::Calendar,
            Some(NavigationParams::new().with_action(ViewAction::Create)),
            1,
        ));
        assert_eq!(screen.modal(), Some(&ScreenModal::Create));
    }

    #[test]
    fn test_plain_navigation_leaves_modal_closed() {
        let mut screen = CalendarScreen::new();
        screen.on_navigation(&context(ViewId::Calendar, None, 1));
        assert_eq!(screen.modal(), None);
    }
}
