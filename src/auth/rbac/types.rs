//! RBAC type definitions

use crate::core::models::RoleGroup;
use serde::{Deserialize, Serialize};

/// Coarse permission verb
///
/// Gates toolbar-level affordances only. The named capability vocabulary is
/// a separate table and the two are never conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionVerb {
    /// View data
    Read,
    /// Create and update data
    Write,
    /// Remove data
    Delete,
    /// Universal override for coarse checks
    Admin,
}

impl PermissionVerb {
    /// All coarse verbs, in declaration order
    pub const ALL: [PermissionVerb; 4] = [
        PermissionVerb::Read,
        PermissionVerb::Write,
        PermissionVerb::Delete,
        PermissionVerb::Admin,
    ];
}

impl std::fmt::Display for PermissionVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PermissionVerb::Read => "read",
            PermissionVerb::Write => "write",
            PermissionVerb::Delete => "delete",
            PermissionVerb::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}

/// Access level granted on a resource
///
/// Levels gate behavior, not magnitude; no ordering is defined across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Unrestricted access
    Full,
    /// View-only access
    Readonly,
    /// Restricted subset of the resource
    Limited,
    /// No access
    None,
}

/// Access grant for a (resource, role group) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// Granted access level
    pub level: AccessLevel,
    /// Human-readable description of the grant
    pub description: String,
    /// Badge label shown next to the navigation entry
    pub badge: Option<String>,
}

impl AccessGrant {
    /// Grant with a description and no badge
    pub fn new<S: Into<String>>(level: AccessLevel, description: S) -> Self {
        Self {
            level,
            description: description.into(),
            badge: None,
        }
    }

    /// Attach a badge label
    pub fn with_badge<S: Into<String>>(mut self, badge: S) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// The grant returned for resources with no table entry
    pub fn default_full() -> Self {
        Self::new(AccessLevel::Full, "Default access")
    }

    /// The grant returned for role groups absent from a resource entry
    pub fn no_access() -> Self {
        Self::new(AccessLevel::None, "No access")
    }

    /// Whether this grant allows any interaction at all
    pub fn allows_access(&self) -> bool {
        self.level != AccessLevel::None
    }
}

/// Permission check result with denial diagnostics
#[derive(Debug, Clone)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role group that granted the permission
    pub granted_by_role: Option<RoleGroup>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
