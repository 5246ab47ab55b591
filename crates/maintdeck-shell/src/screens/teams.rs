//! Teams screen

use maintdeck_core::prelude::*;
use maintdeck_core::{MemberId, NavigationContext, TeamId, ViewAction, ViewId};
use maintdeck_nav::ViewCommands;

use super::{ActionGate, Screen, ScreenModal, ScreenStatus};

/// Coordination state for the teams list.
///
/// A navigation may address a team, a member of a team, or both; the
/// highlight delivered in the params decides which row gets emphasized.
#[derive(Debug, Default)]
pub struct TeamsScreen {
    gate: ActionGate,
    modal: Option<ScreenModal>,
    focused_team: Option<TeamId>,
    focused_member: Option<MemberId>,
    highlight: Option<String>,
}

impl TeamsScreen {
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

impl ViewCommands for TeamsScreen {
    fn open_create_modal(&mut self) {
        self.modal = Some(ScreenModal::Create);
    }
}

impl Screen for TeamsScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Teams
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
        if params.member_id.is_some() {
            self.focused_member = params.member_id.clone();
        }

        match params.action {
            Some(ViewAction::Create) => self.open_create_modal(),
            Some(ViewAction::Edit) => match &params.team_id {
                Some(id) => self.modal = Some(ScreenModal::Edit(id.as_str().to_string())),
                None => debug!("team edit requested without a team id"),
            },
            Some(ViewAction::View) | None => {
                if let Some(id) = &params.team_id {
                    self.focused_team = Some(id.clone());
                }
            }
        }
    }

    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        Some(self)
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::Teams);
        status.modal = self.modal.clone();
        status.focused_id = self
            .focused_member
            .as_ref()
            .map(|id| id.as_str().to_string())
            .or_else(|| {
                self.focused_team
                    .as_ref()
                    .map(|id| id.as_str().to_string())
            });
        status.highlight_id = self.highlight.clone();
        status
    }
}
