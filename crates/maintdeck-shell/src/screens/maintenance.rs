//! Maintenance request screen
//!
//! Besides the usual list coordination, this screen owns the pick-a-team
//! flow: creating or editing a request may require choosing an assignee
//! team, which means navigating away to the teams view and receiving the
//! picked team when it is dismissed.

use std::sync::{Arc, Mutex};

use maintdeck_core::prelude::*;
use maintdeck_core::{NavigationContext, RequestId, ReturnValue, TeamId, ViewAction, ViewId};
use maintdeck_nav::ViewCommands;

use super::{ActionGate, Screen, ScreenModal, ScreenStatus};

/// Shared slot the teams-picker return handler writes into.
///
/// The return callback outlives any borrow of the screen, so the picked
/// team lands in a shared cell both sides hold.
#[derive(Debug, Clone, Default)]
pub struct AssignmentSlot(Arc<Mutex<Option<TeamId>>>);

impl AssignmentSlot {
    pub fn set(&self, team: TeamId) {
        *self.lock() = Some(team);
    }

    pub fn get(&self) -> Option<TeamId> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TeamId>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Extract a team id from a `go_back` result.
///
/// Accepts either a bare string or an object with a `team_id` field;
/// anything else reads as no pick.
pub fn team_from_return(value: &ReturnValue) -> Option<TeamId> {
    match value {
        serde_json::Value::String(id) => Some(TeamId::from(id.as_str())),
        serde_json::Value::Object(fields) => fields
            .get("team_id")
            .and_then(|v| v.as_str())
            .map(TeamId::from),
        _ => None,
    }
}

/// Coordination state for the maintenance request list.
#[derive(Debug, Default)]
pub struct MaintenanceScreen {
    gate: ActionGate,
    modal: Option<ScreenModal>,
    focused: Option<RequestId>,
    team_filter: Option<String>,
    status_filter: Option<String>,
    assignment: AssignmentSlot,
}

impl MaintenanceScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Option<&ScreenModal> {
        self.modal.as_ref()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Handle to the slot the teams-picker return flow fills.
    pub fn assignment_slot(&self) -> AssignmentSlot {
        self.assignment.clone()
    }

    pub fn assigned_team(&self) -> Option<TeamId> {
        self.assignment.get()
    }
}

impl ViewCommands for MaintenanceScreen {
    fn open_create_modal(&mut self) {
        self.modal = Some(ScreenModal::Create);
    }
}

impl Screen for MaintenanceScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Maintenance
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
        if params.status_filter.is_some() {
            self.status_filter = params.status_filter.clone();
        }

        match params.action {
            Some(ViewAction::Create) => self.open_create_modal(),
            Some(ViewAction::Edit) => match &params.request_id {
                Some(id) => self.modal = Some(ScreenModal::Edit(id.as_str().to_string())),
                None => debug!("maintenance edit requested without a request id"),
            },
            Some(ViewAction::View) | None => {
                if let Some(id) = &params.request_id {
                    self.focused = Some(id.clone());
                }
            }
        }
    }

    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        Some(self)
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::Maintenance);
        status.modal = self.modal.clone();
        status.focused_id = self.focused.as_ref().map(|id| id.as_str().to_string());
        if let Some(filter) = &self.team_filter {
            status.filters.push(format!("team={filter}"));
        }
        if let Some(filter) = &self.status_filter {
            status.filters.push(format!("status={filter}"));
        }
        if let Some(team) = self.assignment.get() {
            status.detail = Some(serde_json::json!({ "assigned_team": team }));
        }
        status
    }
}
