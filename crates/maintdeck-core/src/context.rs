//! Navigation context: one committed view transition

use serde::Serialize;

use crate::view::{NavigationParams, ViewId};

/// Payload a dismissed view hands back through `go_back`.
///
/// The shape is view-specific (a picked team id, a created record id, ...),
/// so the router treats it as opaque JSON. `None` means cancellation.
pub type ReturnValue = serde_json::Value;

/// One committed transition: where the application came from, where it is
/// now, and the parameters the destination should honor.
///
/// Delivered to observers as a read-only clone; nothing reachable from a
/// delivered context can mutate router state. The return callback attached
/// to the originating request stays behind in the router and is not part of
/// this value.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationContext {
    /// View that issued the request
    pub source_view: ViewId,

    /// View the application is showing after this transition
    pub target_view: ViewId,

    /// Structured parameters for the destination, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<NavigationParams>,

    /// Monotonic creation order, assigned by the router.
    ///
    /// Exists for ordering and debugging; two contexts with equal fields
    /// but different sequence numbers are distinct events.
    pub sequence: u64,
}

impl NavigationContext {
    /// Action requested of the destination, if the request carried one.
    pub fn action(&self) -> Option<crate::view::ViewAction> {
        self.params.as_ref().and_then(|p| p.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewAction;

    #[test]
    fn test_action_reads_through_params() {
        let context = NavigationContext {
            source_view: ViewId::Dashboard,
            target_view: ViewId::Equipment,
            params: Some(NavigationParams::new().with_action(ViewAction::Create)),
            sequence: 1,
        };
        assert_eq!(context.action(), Some(ViewAction::Create));

        let bare = NavigationContext {
            source_view: ViewId::Dashboard,
            target_view: ViewId::Teams,
            params: None,
            sequence: 2,
        };
        assert_eq!(bare.action(), None);
    }

    #[test]
    fn test_context_serializes_for_diagnostics() {
        let context = NavigationContext {
            source_view: ViewId::Maintenance,
            target_view: ViewId::Teams,
            params: None,
            sequence: 7,
        };
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["source_view"], "maintenance");
        assert_eq!(json["target_view"], "teams");
        assert_eq!(json["sequence"], 7);
    }
}
