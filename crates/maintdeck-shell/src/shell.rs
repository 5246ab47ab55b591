//! Hosting shell: maps navigation events to mounted screens
//!
//! The shell owns one screen per view, a [`ViewBinding`] for issuing
//! requests, and its own router subscription. Events queue as they arrive
//! and are applied by [`Shell::pump`], keeping screen mutation on the
//! shell's schedule rather than inside the router's notification loop.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use maintdeck_core::prelude::*;
use maintdeck_core::{NavigationContext, NavigationParams, TeamId, ViewId};
use maintdeck_nav::{OnReturn, Router, Subscription, ViewBinding};

use crate::config::ShellConfig;
use crate::screens::{
    team_from_return, AssignmentSlot, CalendarScreen, CategoriesScreen, DashboardScreen,
    EquipmentScreen, MaintenanceScreen, ReportingScreen, Screen, ScreenStatus, TeamsScreen,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Serializable snapshot of the shell for diagnostics and the driver.
#[derive(Debug, Clone, Serialize)]
pub struct ShellStatus {
    pub active_view: ViewId,
    pub can_go_back: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<NavigationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenStatus>,
}

/// The hosting shell.
pub struct Shell {
    binding: ViewBinding,
    screens: HashMap<ViewId, Box<dyn Screen>>,
    active_view: ViewId,
    fallback_view: ViewId,
    log_navigation: bool,
    assignment: AssignmentSlot,
    pending: Arc<Mutex<VecDeque<NavigationContext>>>,
    _subscription: Subscription,
}

impl Shell {
    /// Build a shell with every view mounted.
    pub fn new(router: &Arc<Router>, config: &ShellConfig) -> Self {
        let maintenance = MaintenanceScreen::new();
        let assignment = maintenance.assignment_slot();

        let screens: Vec<Box<dyn Screen>> = vec![
            Box::new(DashboardScreen::new()),
            Box::new(maintenance),
            Box::new(CalendarScreen::new()),
            Box::new(EquipmentScreen::new()),
            Box::new(CategoriesScreen::new()),
            Box::new(TeamsScreen::new()),
            Box::new(ReportingScreen::new()),
        ];
        Self::from_parts(router, config, screens, assignment)
    }

    /// Build a shell with an explicit (possibly partial) set of screens.
    ///
    /// Navigations targeting an unmounted view fall back to the configured
    /// default view. The team-assignment slot is disconnected unless the
    /// provided set was wired up by the caller.
    pub fn with_screens(
        router: &Arc<Router>,
        config: &ShellConfig,
        screens: Vec<Box<dyn Screen>>,
    ) -> Self {
        Self::from_parts(router, config, screens, AssignmentSlot::default())
    }

    fn from_parts(
        router: &Arc<Router>,
        config: &ShellConfig,
        screens: Vec<Box<dyn Screen>>,
        assignment: AssignmentSlot,
    ) -> Self {
        // The binding subscribes first, so its read model is already fresh
        // when the shell's own listener enqueues the event.
        let binding = ViewBinding::new(router);

        let pending = Arc::new(Mutex::new(VecDeque::new()));
        let queue = Arc::clone(&pending);
        let subscription = router.subscribe(move |context: &NavigationContext| {
            lock(&queue).push_back(context.clone());
        });

        let screens: HashMap<ViewId, Box<dyn Screen>> = screens
            .into_iter()
            .map(|screen| (screen.view_id(), screen))
            .collect();

        Self {
            binding,
            screens,
            active_view: config.default_view,
            fallback_view: config.default_view,
            log_navigation: config.log_navigation,
            assignment,
            pending,
            _subscription: subscription,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Event application
    // ─────────────────────────────────────────────────────────

    /// Apply every queued navigation event. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let Some(context) = lock(&self.pending).pop_front() else {
                break;
            };
            self.route(&context);
            applied += 1;
        }
        applied
    }

    fn route(&mut self, context: &NavigationContext) {
        if self.log_navigation {
            info!(
                source = %context.source_view,
                target = %context.target_view,
                sequence = context.sequence,
                "showing view"
            );
        }

        let target = context.target_view;
        if let Some(screen) = self.screens.get_mut(&target) {
            self.active_view = target;
            screen.on_navigation(context);
        } else {
            // The router accepts any target; rejecting unsupported views is
            // the shell's job, and it degrades to the default view.
            warn!(
                view = %target,
                fallback = %self.fallback_view,
                "no screen mounted for view, showing fallback"
            );
            self.active_view = self.fallback_view;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Imperative commands
    // ─────────────────────────────────────────────────────────

    /// Relay the shell's "New" button to the active view.
    ///
    /// Returns false when the active view exposes no create command
    /// (dashboard, reporting).
    pub fn open_create_on_active(&mut self) -> bool {
        match self
            .screens
            .get_mut(&self.active_view)
            .and_then(|screen| screen.commands())
        {
            Some(commands) => {
                commands.open_create_modal();
                true
            }
            None => {
                debug!(view = %self.active_view, "active view exposes no create command");
                false
            }
        }
    }

    /// Start the pick-a-team flow for the maintenance view.
    ///
    /// Navigates to the teams view with a return handler; the result of the
    /// eventual `go_back` lands in the maintenance screen's assignment
    /// slot. A `None` result (cancellation) leaves the slot untouched.
    pub fn begin_team_assignment(&mut self) {
        let slot = self.assignment.clone();
        let on_return: OnReturn = Box::new(move |result| {
            match result.as_ref().and_then(team_from_return) {
                Some(team) => {
                    info!(team = %team, "team assignment completed");
                    slot.set(team);
                }
                None => info!("team assignment cancelled"),
            }
        });
        self.binding.navigate(ViewId::Teams, None, Some(on_return));
    }

    /// Team picked by the most recent assignment flow, if any.
    pub fn assigned_team(&self) -> Option<TeamId> {
        self.assignment.get()
    }

    // ─────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn binding(&self) -> &ViewBinding {
        &self.binding
    }

    pub fn status(&self) -> ShellStatus {
        ShellStatus {
            active_view: self.active_view,
            can_go_back: self.binding.can_go_back(),
            params: self.binding.params(),
            screen: self
                .screens
                .get(&self.active_view)
                .map(|screen| screen.status()),
        }
    }
}
