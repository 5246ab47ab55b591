//! # maintdeck-core - Core Domain Types
//!
//! Foundation crate for Maintdeck. Provides the view identifier set,
//! navigation parameter/context types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Views (`view`)
//! - [`ViewId`] - Closed enumeration of dashboard screens
//! - [`ViewAction`] - Action requested of a destination view (create/edit/view)
//! - [`NavigationParams`] - Optional-field parameter bag for a transition
//! - Entity id newtypes: [`EquipmentId`], [`TeamId`], [`MemberId`],
//!   [`RequestId`], [`CategoryId`]
//!
//! ### Context (`context`)
//! - [`NavigationContext`] - One committed transition (source, target,
//!   params, sequence)
//! - [`ReturnValue`] - Opaque payload handed back on `go_back`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use maintdeck_core::prelude::*;
//! ```

pub mod context;
pub mod error;
pub mod logging;
pub mod view;

/// Prelude for common imports used throughout all Maintdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use context::{NavigationContext, ReturnValue};
pub use error::{Error, Result, ResultExt};
pub use view::{
    CategoryId, EquipmentId, MemberId, NavigationParams, RequestId, TeamId, ViewAction, ViewId,
};
