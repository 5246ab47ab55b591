//! Equipment inventory screen

use maintdeck_core::prelude::*;
use maintdeck_core::{EquipmentId, NavigationContext, ViewAction, ViewId};
use maintdeck_nav::ViewCommands;

use super::{ActionGate, Screen, ScreenModal, ScreenStatus};

/// Coordination state for the equipment list.
#[derive(Debug, Default)]
pub struct EquipmentScreen {
    gate: ActionGate,
    modal: Option<ScreenModal>,
    focused: Option<EquipmentId>,
    highlight: Option<String>,
    category_filter: Option<String>,
    status_filter: Option<String>,
}

impl EquipmentScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Option<&ScreenModal> {
        self.modal.as_ref()
    }

    /// Dismiss whatever form is open (user pressed cancel/saved).
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

impl ViewCommands for EquipmentScreen {
    fn open_create_modal(&mut self) {
        self.modal = Some(ScreenModal::Create);
    }
}

impl Screen for EquipmentScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Equipment
    }

    fn on_navigation(&mut self, context: &NavigationContext) {
        if !self.gate.admit(context) {
            return;
        }
        let Some(params) = context.params.as_ref() else {
            return;
        };

        if params.category_filter.is_some() {
            self.category_filter = params.category_filter.clone();
        }
        if params.status_filter.is_some() {
            self.status_filter = params.status_filter.clone();
        }
        if params.highlight_id.is_some() {
            self.highlight = params.highlight_id.clone();
        }

        match params.action {
            Some(ViewAction::Create) => self.open_create_modal(),
            Some(ViewAction::Edit) => match &params.equipment_id {
                Some(id) => self.modal = Some(ScreenModal::Edit(id.as_str().to_string())),
                None => debug!("equipment edit requested without an equipment id"),
            },
            Some(ViewAction::View) | None => {
                if let Some(id) = &params.equipment_id {
                    self.focused = Some(id.clone());
                }
            }
        }
    }

    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        Some(self)
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::Equipment);
        status.modal = self.modal.clone();
        status.focused_id = self.focused.as_ref().map(|id| id.as_str().to_string());
        status.highlight_id = self.highlight.clone();
        if let Some(filter) = &self.category_filter {
            status.filters.push(format!("category={filter}"));
        }
        if let Some(filter) = &self.status_filter {
            status.filters.push(format!("status={filter}"));
        }
        status
    }
}
