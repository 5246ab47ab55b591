//! Reporting screen
//!
//! Read-only view: charts and trend summaries. No command surface; the
//! shell's "New" button has nothing to create here.

use maintdeck_core::{NavigationContext, ViewId};

use super::{ActionGate, Screen, ScreenStatus};

#[derive(Debug, Default)]
pub struct ReportingScreen {
    gate: ActionGate,
    team_filter: Option<String>,
    category_filter: Option<String>,
}

impl ReportingScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for ReportingScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Reporting
    }

    fn on_navigation(&mut self, context: &NavigationContext) {
        if !self.gate.admit(context) {
            return;
        }
        let Some(params) = context.params.as_ref() else {
            return;
        };
        if params.team_filter.is_some() {
            self.team_filter = params.team_filter.clone();
        }
        if params.category_filter.is_some() {
            self.category_filter = params.category_filter.clone();
        }
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::Reporting);
        if let Some(filter) = &self.team_filter {
            status.filters.push(format!("team={filter}"));
        }
        if let Some(filter) = &self.category_filter {
            status.filters.push(format!("category={filter}"));
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;
    use maintdeck_core::NavigationParams;

    #[test]
    fn test_reporting_has_no_command_surface() {
        let mut screen = ReportingScreen::new();
        assert!(screen.commands().is_none());
    }

    #[test]
    fn test_filters_are_adopted() {
        let mut screen = ReportingScreen::new();
        screen.on_navigation(&context(
            ViewId::Reporting,
            Some(NavigationParams::new().with_team_filter("t-2")),
            1,
        ));
        assert_eq!(screen.status().filters, vec!["team=t-2"]);
    }
}
