//! Default toolbar configuration
//!
//! The static section/sub-tab tree for the dashboard. Constructed once per
//! process; user-dependent decisions happen in the filter, never here.

use once_cell::sync::Lazy;

use crate::auth::rbac::AccessLevel;
use crate::core::models::RoleGroup;

use super::types::{SubTab, ToolbarSection};

static DEFAULT_TOOLBAR: Lazy<Vec<ToolbarSection>> = Lazy::new(build_default_toolbar);

/// The default toolbar tree
pub fn default_toolbar() -> &'static [ToolbarSection] {
    &DEFAULT_TOOLBAR
}

fn build_default_toolbar() -> Vec<ToolbarSection> {
    use RoleGroup::{Admin, Ae, Ceo, Designer, Finance, It, Logistics, Marketing, TeamLead};

    vec![
        ToolbarSection {
            id: "dashboard".to_string(),
            label: "Dashboard".to_string(),
            icon: "layout-dashboard".to_string(),
            order: 10,
            required_roles: RoleGroup::ALL.to_vec(),
            sub_tabs: vec![
                SubTab {
                    id: "overview".to_string(),
                    label: "Overview".to_string(),
                    required_roles: RoleGroup::ALL.to_vec(),
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "my-tasks".to_string(),
                    label: "My Tasks".to_string(),
                    required_roles: RoleGroup::ALL.to_vec(),
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "ai-assistant".to_string(),
                    label: "AI Assistant".to_string(),
                    required_roles: RoleGroup::ALL.to_vec(),
                    default_access: AccessLevel::Full,
                    badge: Some("Beta".to_string()),
                    notification_count: None,
                },
                SubTab {
                    id: "announcements".to_string(),
                    label: "Announcements".to_string(),
                    required_roles: RoleGroup::ALL.to_vec(),
                    default_access: AccessLevel::Readonly,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "events".to_string(),
            label: "Events".to_string(),
            icon: "calendar".to_string(),
            order: 20,
            required_roles: vec![Ceo, Admin, TeamLead, Ae, Marketing, Logistics, Designer],
            sub_tabs: vec![
                SubTab {
                    id: "event-calendar".to_string(),
                    label: "Calendar".to_string(),
                    required_roles: vec![Ceo, Admin, TeamLead, Ae, Marketing, Logistics, Designer],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "event-approvals".to_string(),
                    label: "Approvals".to_string(),
                    required_roles: vec![Ceo, Admin],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: Some(3),
                },
                SubTab {
                    id: "event-archive".to_string(),
                    label: "Archive".to_string(),
                    required_roles: vec![Ceo, Admin, TeamLead],
                    default_access: AccessLevel::Readonly,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "budgets".to_string(),
            label: "Budgets".to_string(),
            icon: "wallet".to_string(),
            order: 30,
            required_roles: vec![Ceo, Admin, Finance, TeamLead, Ae, It],
            sub_tabs: vec![
                SubTab {
                    id: "budget-overview".to_string(),
                    label: "Overview".to_string(),
                    required_roles: vec![Ceo, Admin, Finance, TeamLead],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "financial-reports".to_string(),
                    label: "Financial Reports".to_string(),
                    required_roles: vec![Ceo, Admin, Finance, TeamLead, It, Ae],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "invoices".to_string(),
                    label: "Invoices".to_string(),
                    required_roles: vec![Admin, Finance],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "marketing".to_string(),
            label: "Marketing".to_string(),
            icon: "megaphone".to_string(),
            order: 40,
            required_roles: vec![Ceo, Admin, Marketing, Ae],
            sub_tabs: vec![
                SubTab {
                    id: "email-campaigns".to_string(),
                    label: "Email Campaigns".to_string(),
                    required_roles: vec![Admin, Marketing],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "campaign-templates".to_string(),
                    label: "Templates".to_string(),
                    required_roles: vec![Marketing],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "contact-directory".to_string(),
                    label: "Contacts".to_string(),
                    required_roles: vec![Ceo, Admin, Marketing, Ae],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "files".to_string(),
            label: "Files".to_string(),
            icon: "folder".to_string(),
            order: 50,
            required_roles: RoleGroup::ALL.to_vec(),
            sub_tabs: vec![
                SubTab {
                    id: "uploads".to_string(),
                    label: "Uploads".to_string(),
                    required_roles: RoleGroup::ALL.to_vec(),
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "brand-assets".to_string(),
                    label: "Brand Assets".to_string(),
                    required_roles: vec![Designer, Marketing, Admin],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "archived-files".to_string(),
                    label: "Archived".to_string(),
                    required_roles: vec![Admin, It],
                    default_access: AccessLevel::Readonly,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "pods".to_string(),
            label: "Pods".to_string(),
            icon: "users".to_string(),
            order: 60,
            required_roles: vec![Ceo, Admin, TeamLead, Logistics],
            sub_tabs: vec![
                SubTab {
                    id: "pod-roster".to_string(),
                    label: "Roster".to_string(),
                    required_roles: vec![Ceo, Admin, TeamLead, Logistics],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "pod-assignments".to_string(),
                    label: "Assignments".to_string(),
                    required_roles: vec![Admin, TeamLead],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
        ToolbarSection {
            id: "administration".to_string(),
            label: "Administration".to_string(),
            icon: "shield".to_string(),
            order: 70,
            required_roles: vec![Ceo, Admin, It],
            sub_tabs: vec![
                SubTab {
                    id: "user-management".to_string(),
                    label: "User Management".to_string(),
                    required_roles: vec![Ceo, Admin, It],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "access-review".to_string(),
                    label: "Access Review".to_string(),
                    required_roles: vec![Ceo, Admin],
                    default_access: AccessLevel::Full,
                    badge: None,
                    notification_count: None,
                },
                SubTab {
                    id: "system-settings".to_string(),
                    label: "Settings".to_string(),
                    required_roles: vec![Admin, It],
                    default_access: AccessLevel::Limited,
                    badge: None,
                    notification_count: None,
                },
            ],
        },
    ]
}
