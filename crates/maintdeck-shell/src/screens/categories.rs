//! Equipment category screen

use maintdeck_core::prelude::*;
use maintdeck_core::{CategoryId, NavigationContext, ViewAction, ViewId};
use maintdeck_nav::ViewCommands;

use super::{ActionGate, Screen, ScreenModal, ScreenStatus};

/// Coordination state for the category list.
#[derive(Debug, Default)]
pub struct CategoriesScreen {
    gate: ActionGate,
    modal: Option<ScreenModal>,
    focused: Option<CategoryId>,
    highlight: Option<String>,
}

impl CategoriesScreen {
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

impl ViewCommands for CategoriesScreen {
    fn open_create_modal(&mut self) {
        self.modal = Some(ScreenModal::Create);
    }
}

impl Screen for CategoriesScreen {
    fn view_id(&self) -> ViewId {
        ViewId::EquipmentCategories
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

        match params.action {
            Some(ViewAction::Create) => self.open_create_modal(),
            Some(ViewAction::Edit) => match &params.category_id {
                Some(id) => self.modal = Some(ScreenModal::Edit(id.as_str().to_string())),
                None => debug!("category edit requested without a category id"),
            },
            Some(ViewAction::View) | None => {
                if let Some(id) = &params.category_id {
                    self.focused = Some(id.clone());
                }
            }
        }
    }

    fn commands(&mut self) -> Option<&mut dyn ViewCommands> {
        Some(self)
    }

    fn status(&self) -> ScreenStatus {
        let mut status = ScreenStatus::new(ViewId::EquipmentCategories);
        status.modal = self.modal.clone();
        status.focused_id = self.focused.as_ref().map(|id| id.as_str().to_string());
        status.highlight_id = self.highlight.clone();
        status
    }
}
