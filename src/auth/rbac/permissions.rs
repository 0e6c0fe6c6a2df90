//! Permission checking methods

use crate::core::models::{RoleGroup, User};

use super::system::RbacSystem;
use super::types::{AccessGrant, PermissionCheck, PermissionVerb};

impl RbacSystem {
    /// Check a coarse permission verb for a user
    ///
    /// `Admin` in the group's verb set short-circuits every coarse check to
    /// granted. The override stops here: resource grants and capabilities
    /// are consulted independently and can still deny.
    pub fn has_permission(&self, user: Option<&User>, verb: PermissionVerb) -> bool {
        let Some(user) = user else {
            return false;
        };

        match self.role_permissions.get(&user.role.group()) {
            Some(verbs) => verbs.contains(&PermissionVerb::Admin) || verbs.contains(&verb),
            None => false,
        }
    }

    /// Check a coarse verb AND a caller-supplied condition
    ///
    /// The condition runs only after the base check has granted; conditions
    /// may assume base access when they inspect the user.
    pub fn has_permission_when<F>(&self, user: Option<&User>, verb: PermissionVerb, condition: F) -> bool
    where
        F: FnOnce(&User) -> bool,
    {
        let Some(user) = user else {
            return false;
        };

        if !self.has_permission(Some(user), verb) {
            return false;
        }

        condition(user)
    }

    /// Check a named capability for a user
    ///
    /// No override exists on this path; every capability must be explicitly
    /// listed for the user's role.
    pub fn has_capability(&self, user: Option<&User>, capability: &str) -> bool {
        let Some(user) = user else {
            return false;
        };

        self.capabilities
            .get(&user.role)
            .is_some_and(|granted| granted.contains(capability))
    }

    /// Look up the access grant for a (resource, role group) pair
    ///
    /// A resource with no table entry grants full access to any group that
    /// reaches it through navigation; a resource entry that omits the group
    /// denies it. The two misses are distinct policies, not one fallback.
    pub fn resource_access(&self, resource_id: &str, group: RoleGroup) -> AccessGrant {
        match self.resource_grants.get(resource_id) {
            None => AccessGrant::default_full(),
            Some(grants) => grants.get(&group).cloned().unwrap_or_else(AccessGrant::no_access),
        }
    }

    /// Coarse check with denial diagnostics
    pub fn check_permission_detailed(
        &self,
        user: Option<&User>,
        verb: PermissionVerb,
    ) -> PermissionCheck {
        let Some(user) = user else {
            return PermissionCheck {
                granted: false,
                granted_by_role: None,
                denial_reason: Some("No authenticated user".to_string()),
            };
        };

        let group = user.role.group();
        if self.has_permission(Some(user), verb) {
            PermissionCheck {
                granted: true,
                granted_by_role: Some(group),
                denial_reason: None,
            }
        } else {
            PermissionCheck {
                granted: false,
                granted_by_role: None,
                denial_reason: Some(format!("Group {} lacks verb {}", group, verb)),
            }
        }
    }
}
