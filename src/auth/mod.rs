//! Authorization system
//!
//! Composes the static RBAC tables, the configuration layer, and the
//! current-user session store. There is no authentication here: users arrive
//! already identified from the embedding application's session collaborator.

pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use rbac::{AccessGrant, AccessLevel, PermissionCheck, PermissionVerb, RbacSystem};
pub use session::Session;

use crate::config::AccessConfig;
use crate::core::models::{Role, User};
use std::sync::Arc;
use tracing::info;

/// Main authorization system
#[derive(Debug, Clone)]
pub struct AccessSystem {
    /// Access configuration
    config: Arc<AccessConfig>,
    /// RBAC tables and resolvers
    rbac: Arc<RbacSystem>,
    /// Current-user store
    session: Arc<Session>,
}

impl AccessSystem {
    /// Create a new access system
    pub fn new(config: &AccessConfig) -> Self {
        info!("Initializing access system");
        crate::config::warn_permissive_config(config);

        let system = Self {
            config: Arc::new(config.clone()),
            rbac: Arc::new(RbacSystem::new()),
            session: Arc::new(Session::new()),
        };

        info!("Access system initialized successfully");
        system
    }

    /// The RBAC tables and resolvers
    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    /// The current-user store
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Config-gated coarse authorization with diagnostics
    ///
    /// When access control is disabled in configuration everything is
    /// allowed; the pure resolver tables are unaffected by the flag.
    pub fn authorize(&self, user: Option<&User>, verb: PermissionVerb) -> PermissionCheck {
        if !self.config.enabled {
            return PermissionCheck {
                granted: true,
                granted_by_role: user.map(|u| u.role.group()),
                denial_reason: None,
            };
        }

        self.rbac.check_permission_detailed(user, verb)
    }

    /// Whether the user's group is configured as an admin group
    pub fn is_admin(&self, user: &User) -> bool {
        self.config
            .admin_roles
            .iter()
            .any(|role| role == &user.role.group().to_string())
    }

    /// The configured default role for new sign-ins
    ///
    /// Validated at configuration load; degrades to the least-privileged
    /// role rather than failing if the string has gone stale since.
    pub fn default_role(&self) -> Role {
        self.config
            .default_role
            .parse()
            .unwrap_or(Role::LogisticsStaff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_disabled_allows_everything() {
        let config = AccessConfig {
            enabled: false,
            ..AccessConfig::default()
        };
        let system = AccessSystem::new(&config);
        let user = User::new("lstaff", "l.staff@pulseboard.example", Role::LogisticsStaff);

        let check = system.authorize(Some(&user), PermissionVerb::Delete);
        assert!(check.granted);
    }

    #[test]
    fn test_authorize_enabled_consults_tables() {
        let system = AccessSystem::new(&AccessConfig::default());
        let user = User::new("lstaff", "l.staff@pulseboard.example", Role::LogisticsStaff);

        let check = system.authorize(Some(&user), PermissionVerb::Read);
        assert!(!check.granted);
        assert!(check.denial_reason.is_some());
    }

    #[test]
    fn test_is_admin_follows_config() {
        let system = AccessSystem::new(&AccessConfig::default());

        let admin = User::new("admin", "admin@pulseboard.example", Role::Administrator);
        let designer = User::new("dsgn", "dsgn@pulseboard.example", Role::Designer);

        assert!(system.is_admin(&admin));
        assert!(!system.is_admin(&designer));
    }

    #[test]
    fn test_default_role_parses_config() {
        let system = AccessSystem::new(&AccessConfig::default());
        assert_eq!(system.default_role(), Role::LogisticsStaff);
    }
}
