//! Named capability query surface
//!
//! Thin wrappers over [`RbacSystem::has_capability`] used by feature views
//! to gate rendering and actions. Each query maps to exactly one capability
//! name, except the two composites which are a named OR of two base checks.

use crate::core::models::User;

use super::system::RbacSystem;

impl RbacSystem {
    /// Create new events
    pub fn can_create_events(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "create_events")
    }

    /// Approve events for publication
    pub fn can_approve_events(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "approve_events")
    }

    /// See complete budget figures rather than summaries
    pub fn can_view_budgets_full(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "view_budgets_full")
    }

    /// Edit budget line items
    pub fn can_edit_budgets(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "edit_budgets")
    }

    /// Send email campaigns
    pub fn can_send_campaigns(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "send_campaigns")
    }

    /// Administer user accounts
    pub fn can_manage_users(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "manage_users")
    }

    /// Create and restructure pods
    pub fn can_manage_pods(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "manage_pods")
    }

    /// Export report data
    pub fn can_export_reports(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "export_reports")
    }

    /// See the team task board
    ///
    /// Composite: team managers and assignees both reach the board.
    pub fn can_view_team_tasks(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "manage_tasks_team")
            || self.has_capability(user, "update_tasks_assigned")
    }

    /// Manage uploaded files
    ///
    /// Composite: full upload managers and own-files-only uploaders.
    pub fn can_manage_uploads(&self, user: Option<&User>) -> bool {
        self.has_capability(user, "manage_uploads_all")
            || self.has_capability(user, "manage_uploads_own")
    }
}
