//! View identifiers, entity ids, and navigation parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One screen of the dashboard application.
///
/// The set is closed: every view the application can show is listed here.
/// Wire names are kebab-case and match the tab names used by the hosting
/// shell (`equipment-categories`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    /// Landing view with metrics and the open-requests table
    #[default]
    Dashboard,

    /// Maintenance request list and stage pipeline
    Maintenance,

    /// Scheduled maintenance calendar
    Calendar,

    /// Equipment inventory
    Equipment,

    /// Equipment category management
    EquipmentCategories,

    /// Teams and team members
    Teams,

    /// Reporting and trend charts
    Reporting,
}

impl ViewId {
    /// All views, in tab order.
    pub const ALL: [ViewId; 7] = [
        ViewId::Dashboard,
        ViewId::Maintenance,
        ViewId::Calendar,
        ViewId::Equipment,
        ViewId::EquipmentCategories,
        ViewId::Teams,
        ViewId::Reporting,
    ];

    /// Stable wire name for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Maintenance => "maintenance",
            ViewId::Calendar => "calendar",
            ViewId::Equipment => "equipment",
            ViewId::EquipmentCategories => "equipment-categories",
            ViewId::Teams => "teams",
            ViewId::Reporting => "reporting",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(ViewId::Dashboard),
            "maintenance" => Ok(ViewId::Maintenance),
            "calendar" => Ok(ViewId::Calendar),
            "equipment" => Ok(ViewId::Equipment),
            "equipment-categories" => Ok(ViewId::EquipmentCategories),
            "teams" => Ok(ViewId::Teams),
            "reporting" => Ok(ViewId::Reporting),
            other => Err(Error::unknown_view(other)),
        }
    }
}

/// Action a navigation asks the destination view to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewAction {
    /// Open the destination's creation flow
    Create,
    /// Open the destination's edit form for the addressed entity
    Edit,
    /// Show the addressed entity without entering a form
    View,
}

impl ViewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::Create => "create",
            ViewAction::Edit => "edit",
            ViewAction::View => "view",
        }
    }
}

impl fmt::Display for ViewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(ViewAction::Create),
            "edit" => Ok(ViewAction::Edit),
            "view" => Ok(ViewAction::View),
            other => Err(Error::unknown_action(other)),
        }
    }
}

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of an equipment record
    EquipmentId
);
entity_id!(
    /// Identifier of a team
    TeamId
);
entity_id!(
    /// Identifier of a team member
    MemberId
);
entity_id!(
    /// Identifier of a maintenance request
    RequestId
);
entity_id!(
    /// Identifier of an equipment category
    CategoryId
);

/// Structured parameters attached to a navigation request.
///
/// Every field is independently optional and no field implies another.
/// Values are never mutated after construction; the `with_*` builders
/// return a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationParams {
    // Entity ids for direct navigation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<EquipmentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    // Filters for list views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<String>,

    /// Action the destination should perform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ViewAction>,

    /// Item to emphasize in the destination's list after arrival
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_id: Option<String>,
}

impl NavigationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_equipment_id(mut self, id: EquipmentId) -> Self {
        self.equipment_id = Some(id);
        self
    }

    pub fn with_team_id(mut self, id: TeamId) -> Self {
        self.team_id = Some(id);
        self
    }

    pub fn with_member_id(mut self, id: MemberId) -> Self {
        self.member_id = Some(id);
        self
    }

    pub fn with_request_id(mut self, id: RequestId) -> Self {
        self.request_id = Some(id);
        self
    }

    pub fn with_category_id(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn with_team_filter(mut self, filter: impl Into<String>) -> Self {
        self.team_filter = Some(filter.into());
        self
    }

    pub fn with_status_filter(mut self, filter: impl Into<String>) -> Self {
        self.status_filter = Some(filter.into());
        self
    }

    pub fn with_category_filter(mut self, filter: impl Into<String>) -> Self {
        self.category_filter = Some(filter.into());
        self
    }

    pub fn with_action(mut self, action: ViewAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_highlight_id(mut self, id: impl Into<String>) -> Self {
        self.highlight_id = Some(id.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
