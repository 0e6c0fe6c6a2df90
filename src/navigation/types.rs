//! Navigation tree type definitions

use crate::auth::rbac::AccessLevel;
use crate::core::models::RoleGroup;
use serde::{Deserialize, Serialize};

/// Top-level toolbar section
///
/// Static configuration: the permission logic copies sections, it never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolbarSection {
    /// Section id
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Ordering key, ascending
    pub order: u32,
    /// Role groups that may see this section
    pub required_roles: Vec<RoleGroup>,
    /// Sub-tabs in declared order
    pub sub_tabs: Vec<SubTab>,
}

/// Sub-tab within a toolbar section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTab {
    /// Sub-tab id, also the resource key for access-table overrides
    pub id: String,
    /// Display label
    pub label: String,
    /// Role groups that may see this sub-tab
    pub required_roles: Vec<RoleGroup>,
    /// Access level when no resource-table override applies
    pub default_access: AccessLevel,
    /// Decorative badge label
    pub badge: Option<String>,
    /// Pending-item count shown on the tab
    pub notification_count: Option<u32>,
}
