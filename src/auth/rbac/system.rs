//! RBAC system core and static table seeding

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::core::models::{Role, RoleGroup};

use super::types::{AccessGrant, AccessLevel, PermissionVerb};

/// RBAC system holding the three static permission tables
///
/// All tables are seeded at construction and read-only afterwards. The
/// tables are deliberately independent: the coarse verb table keys on
/// [`RoleGroup`], the resource-access table on (resource id, [`RoleGroup`]),
/// and the capability table on the canonical [`Role`].
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Coarse verbs per toolbar group
    pub(super) role_permissions: HashMap<RoleGroup, HashSet<PermissionVerb>>,
    /// Per-group grants for sensitive resources
    pub(super) resource_grants: HashMap<String, HashMap<RoleGroup, AccessGrant>>,
    /// Named capability grants per canonical role
    pub(super) capabilities: HashMap<Role, HashSet<String>>,
}

impl RbacSystem {
    /// Create a new RBAC system with the default tables
    pub fn new() -> Self {
        info!("Initializing RBAC system");

        let mut rbac = Self {
            role_permissions: HashMap::new(),
            resource_grants: HashMap::new(),
            capabilities: HashMap::new(),
        };

        rbac.initialize_coarse_permissions();
        rbac.initialize_resource_access();
        rbac.initialize_capabilities();

        info!("RBAC system initialized successfully");
        rbac
    }

    /// Seed the coarse verb table
    ///
    /// Logistics is intentionally absent: event-operations staff act through
    /// the capability table only and carry no toolbar verbs.
    pub(super) fn initialize_coarse_permissions(&mut self) {
        debug!("Initializing coarse permission table");

        use PermissionVerb::{Admin, Delete, Read, Write};

        let table: [(RoleGroup, &[PermissionVerb]); 8] = [
            (RoleGroup::Ceo, &[Read, Write, Delete, Admin]),
            (RoleGroup::Admin, &[Read, Write, Delete, Admin]),
            (RoleGroup::Finance, &[Read, Write]),
            (RoleGroup::TeamLead, &[Read, Write]),
            (RoleGroup::Marketing, &[Read, Write]),
            (RoleGroup::Ae, &[Read, Write]),
            (RoleGroup::Designer, &[Read, Write]),
            (RoleGroup::It, &[Read, Write, Delete]),
        ];

        for (group, verbs) in table {
            self.role_permissions
                .insert(group, verbs.iter().copied().collect());
        }

        debug!(
            "Initialized coarse permissions for {} groups",
            self.role_permissions.len()
        );
    }

    /// Seed the resource-access table
    ///
    /// Only security- and finance-sensitive resources get explicit entries;
    /// everything else relies on the default-full policy and the sub-tab's
    /// declared access level.
    pub(super) fn initialize_resource_access(&mut self) {
        debug!("Initializing resource access table");

        let resources: Vec<(&str, Vec<(RoleGroup, AccessGrant)>)> = vec![
            (
                "financial-reports",
                vec![
                    (
                        RoleGroup::Ceo,
                        AccessGrant::new(AccessLevel::Full, "Complete financial visibility"),
                    ),
                    (
                        RoleGroup::Finance,
                        AccessGrant::new(AccessLevel::Full, "Finance team access"),
                    ),
                    (
                        RoleGroup::Admin,
                        AccessGrant::new(AccessLevel::Full, "Administrative access"),
                    ),
                    (
                        RoleGroup::TeamLead,
                        AccessGrant::new(AccessLevel::Readonly, "Budget totals for owned events")
                            .with_badge("Read"),
                    ),
                    (
                        RoleGroup::It,
                        AccessGrant::new(AccessLevel::Readonly, "Read-only for system maintenance")
                            .with_badge("Read"),
                    ),
                    (
                        RoleGroup::Ae,
                        AccessGrant::new(AccessLevel::Limited, "Own-account figures only")
                            .with_badge("Limited"),
                    ),
                ],
            ),
            (
                "contact-directory",
                vec![
                    (
                        RoleGroup::Ceo,
                        AccessGrant::new(AccessLevel::Full, "Complete directory access"),
                    ),
                    (
                        RoleGroup::Admin,
                        AccessGrant::new(AccessLevel::Full, "Directory administration"),
                    ),
                    (
                        RoleGroup::Marketing,
                        AccessGrant::new(AccessLevel::Full, "Campaign audience management"),
                    ),
                    (
                        RoleGroup::Ae,
                        AccessGrant::new(AccessLevel::Full, "Client contact management"),
                    ),
                    (
                        RoleGroup::TeamLead,
                        AccessGrant::new(AccessLevel::Readonly, "Attendee lists for owned events")
                            .with_badge("Read"),
                    ),
                    (
                        RoleGroup::It,
                        AccessGrant::new(AccessLevel::Readonly, "Read-only for data maintenance")
                            .with_badge("Read"),
                    ),
                ],
            ),
            (
                "user-management",
                vec![
                    (
                        RoleGroup::Admin,
                        AccessGrant::new(AccessLevel::Full, "Full user administration"),
                    ),
                    (
                        RoleGroup::It,
                        AccessGrant::new(AccessLevel::Limited, "Account provisioning only")
                            .with_badge("Limited"),
                    ),
                    (
                        RoleGroup::Ceo,
                        AccessGrant::new(AccessLevel::Readonly, "Directory overview")
                            .with_badge("Read"),
                    ),
                ],
            ),
            (
                "access-review",
                vec![
                    (
                        RoleGroup::Admin,
                        AccessGrant::new(AccessLevel::Full, "Grant review and reporting"),
                    ),
                    (
                        RoleGroup::Ceo,
                        AccessGrant::new(AccessLevel::Readonly, "Review summaries")
                            .with_badge("Read"),
                    ),
                ],
            ),
        ];

        for (resource_id, grants) in resources {
            self.resource_grants
                .insert(resource_id.to_string(), grants.into_iter().collect());
        }

        debug!(
            "Initialized access entries for {} resources",
            self.resource_grants.len()
        );
    }

    /// Seed the capability table
    ///
    /// There is no admin override on this path; a capability a role does not
    /// list here is a capability that role does not have.
    pub(super) fn initialize_capabilities(&mut self) {
        debug!("Initializing capability table");

        let table: Vec<(Role, &[&str])> = vec![
            (
                Role::Ceo,
                &[
                    "view_events",
                    "approve_events",
                    "view_budgets_full",
                    "approve_budgets",
                    "view_campaigns",
                    "view_uploads",
                    "view_pods",
                    "view_users",
                    "view_tasks",
                    "view_reports",
                    "export_reports",
                ],
            ),
            (
                Role::Administrator,
                &[
                    "create_events",
                    "edit_events",
                    "approve_events",
                    "view_events",
                    "view_budgets_full",
                    "edit_budgets",
                    "view_campaigns",
                    "manage_uploads_all",
                    "view_uploads",
                    "manage_pods",
                    "assign_pod_members",
                    "view_pods",
                    "manage_users",
                    "view_users",
                    "manage_tasks_team",
                    "view_tasks",
                    "view_reports",
                    "export_reports",
                ],
            ),
            (
                Role::Accountant,
                &[
                    "view_events",
                    "view_budgets_full",
                    "edit_budgets",
                    "view_reports",
                    "export_reports",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::HeadOfDesign,
                &[
                    "view_events",
                    "view_budgets_summary",
                    "manage_uploads_all",
                    "view_uploads",
                    "manage_tasks_team",
                    "view_tasks",
                    "view_pods",
                ],
            ),
            (
                Role::Designer,
                &[
                    "view_events",
                    "manage_uploads_own",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::ItManager,
                &[
                    "view_events",
                    "manage_uploads_all",
                    "view_uploads",
                    "manage_users",
                    "view_users",
                    "manage_tasks_team",
                    "view_tasks",
                    "view_reports",
                ],
            ),
            (
                Role::ItTechnicalStaff,
                &[
                    "view_events",
                    "manage_uploads_own",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::TeamLead,
                &[
                    "create_events",
                    "edit_events",
                    "view_events",
                    "view_budgets_summary",
                    "view_uploads",
                    "assign_pod_members",
                    "view_pods",
                    "manage_tasks_team",
                    "view_tasks",
                ],
            ),
            (
                Role::EventCoordinator,
                &[
                    "create_events",
                    "edit_events",
                    "view_events",
                    "view_budgets_summary",
                    "view_uploads",
                    "view_pods",
                    "manage_tasks_team",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::MarketingStaff,
                &[
                    "view_events",
                    "create_campaigns",
                    "send_campaigns",
                    "view_campaigns",
                    "manage_uploads_own",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::LogisticsStaff,
                &[
                    "view_events",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::SalesRepresentative,
                &[
                    "view_events",
                    "view_budgets_summary",
                    "view_campaigns",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                    "view_pods",
                ],
            ),
            (
                Role::ProductionStaff,
                &[
                    "view_events",
                    "manage_uploads_own",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                ],
            ),
            (
                Role::AccreditationStaff,
                &[
                    "view_events",
                    "view_uploads",
                    "update_tasks_assigned",
                    "view_tasks",
                    "view_reports",
                ],
            ),
        ];

        for (role, capabilities) in table {
            self.capabilities
                .insert(role, capabilities.iter().map(|s| s.to_string()).collect());
        }

        debug!(
            "Initialized capabilities for {} roles",
            self.capabilities.len()
        );
    }

    /// Coarse verbs for a toolbar group; empty set for groups without an entry
    pub fn verbs_for(&self, group: RoleGroup) -> HashSet<PermissionVerb> {
        self.role_permissions.get(&group).cloned().unwrap_or_default()
    }

    /// Capability names granted to a role; empty set for roles without an entry
    pub fn capabilities_for(&self, role: Role) -> HashSet<String> {
        self.capabilities.get(&role).cloned().unwrap_or_default()
    }

    /// Resource ids with explicit access entries
    pub fn restricted_resources(&self) -> Vec<&str> {
        self.resource_grants.keys().map(String::as_str).collect()
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new()
    }
}
