//! Per-consumer façade over the router
//!
//! A mounted view holds a [`ViewBinding`] instead of talking to the router
//! directly: the binding keeps a local read model (current view, params,
//! can-go-back) fresh via its own subscription, and offers typed request
//! builders so callers cannot hand-assemble malformed parameter bags.

use std::sync::{Arc, Mutex};

use maintdeck_core::{
    CategoryId, EquipmentId, MemberId, NavigationContext, NavigationParams, RequestId, ReturnValue,
    TeamId, ViewAction, ViewId,
};

use crate::registry::{lock, Subscription};
use crate::router::{NavigationRequest, OnReturn, Router};

#[derive(Debug, Clone, Default)]
struct ReadModel {
    current_view: ViewId,
    params: Option<NavigationParams>,
    can_go_back: bool,
}

/// Observable "where am I" state plus request builders for one consumer.
///
/// Subscribes on construction and unsubscribes when dropped, so a binding
/// owned by a mounted view tracks exactly that view's lifetime.
pub struct ViewBinding {
    router: Arc<Router>,
    model: Arc<Mutex<ReadModel>>,
    _subscription: Subscription,
}

impl ViewBinding {
    pub fn new(router: &Arc<Router>) -> Self {
        let model = Arc::new(Mutex::new(ReadModel::default()));

        let listener_model = Arc::clone(&model);
        let listener_router = Arc::downgrade(router);
        let subscription = router.subscribe(move |context: &NavigationContext| {
            let can_go_back = listener_router
                .upgrade()
                .map(|router| router.can_go_back())
                .unwrap_or(false);
            let mut model = lock(&listener_model);
            model.current_view = context.target_view;
            model.params = context.params.clone();
            model.can_go_back = can_go_back;
        });

        Self {
            router: Arc::clone(router),
            model,
            _subscription: subscription,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Read model
    // ─────────────────────────────────────────────────────────

    /// View the application is currently showing.
    ///
    /// Defaults to the dashboard before any navigation has committed.
    pub fn current_view(&self) -> ViewId {
        lock(&self.model).current_view
    }

    /// Parameters attached to the current context, if any.
    pub fn params(&self) -> Option<NavigationParams> {
        lock(&self.model).params.clone()
    }

    pub fn can_go_back(&self) -> bool {
        lock(&self.model).can_go_back
    }

    // ─────────────────────────────────────────────────────────
    // Generic navigation
    // ─────────────────────────────────────────────────────────

    /// Request a transition to `target_view`.
    ///
    /// The source view is taken from the read model, so callers never
    /// state where they are coming from.
    pub fn navigate(
        &self,
        target_view: ViewId,
        params: Option<NavigationParams>,
        on_return: Option<OnReturn>,
    ) {
        let mut request = NavigationRequest::new(self.current_view(), target_view);
        request.params = params;
        request.on_return = on_return;
        self.router.navigate(request);
    }

    /// Dismiss the current view, handing `result` to whoever is waiting.
    pub fn go_back(&self, result: Option<ReturnValue>) {
        self.router.go_back(result);
    }

    // ─────────────────────────────────────────────────────────
    // Typed request builders
    // ─────────────────────────────────────────────────────────
    // Each builder fills `action = Create` when no id is supplied, and the
    // provided action (default View) otherwise.

    pub fn navigate_to_equipment(
        &self,
        equipment: Option<EquipmentId>,
        action: Option<ViewAction>,
    ) {
        let mut params = NavigationParams::new().with_action(resolved_action(
            equipment.is_some(),
            action,
        ));
        if let Some(id) = equipment {
            params = params.with_equipment_id(id);
        }
        self.navigate(ViewId::Equipment, Some(params), None);
    }

    /// Navigate to the teams view, optionally addressing a team or one of
    /// its members. Whichever of member/team is present becomes the
    /// highlight, preferring the member.
    pub fn navigate_to_team(
        &self,
        team: Option<TeamId>,
        member: Option<MemberId>,
        action: Option<ViewAction>,
    ) {
        let mut params =
            NavigationParams::new().with_action(resolved_action(team.is_some(), action));
        let highlight = member
            .as_ref()
            .map(|m| m.as_str().to_string())
            .or_else(|| team.as_ref().map(|t| t.as_str().to_string()));
        if let Some(id) = team {
            params = params.with_team_id(id);
        }
        if let Some(id) = member {
            params = params.with_member_id(id);
        }
        if let Some(id) = highlight {
            params = params.with_highlight_id(id);
        }
        self.navigate(ViewId::Teams, Some(params), None);
    }

    pub fn navigate_to_maintenance(
        &self,
        request: Option<RequestId>,
        action: Option<ViewAction>,
    ) {
        let mut params =
            NavigationParams::new().with_action(resolved_action(request.is_some(), action));
        if let Some(id) = request {
            params = params.with_request_id(id);
        }
        self.navigate(ViewId::Maintenance, Some(params), None);
    }

    pub fn navigate_to_categories(
        &self,
        category: Option<CategoryId>,
        action: Option<ViewAction>,
    ) {
        let mut params =
            NavigationParams::new().with_action(resolved_action(category.is_some(), action));
        if let Some(id) = category {
            params = params.with_category_id(id);
        }
        self.navigate(ViewId::EquipmentCategories, Some(params), None);
    }

    pub fn navigate_to_dashboard(&self) {
        self.navigate(ViewId::Dashboard, None, None);
    }
}

fn resolved_action(has_id: bool, action: Option<ViewAction>) -> ViewAction {
    if has_id {
        action.unwrap_or(ViewAction::View)
    } else {
        ViewAction::Create
    }
}
