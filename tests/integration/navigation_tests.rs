//! Navigation tests against the live tables

use pulseboard_rs::navigation::{default_toolbar, filter_sections, resolve_sub_tab_access};
use pulseboard_rs::{AccessLevel, RbacSystem, Role};

use crate::common::{ALL_ROLES, user_with_role};

#[test]
fn visible_sub_tabs_never_resolve_to_no_access() {
    // The toolbar tree and the resource table must agree: a sub-tab a role
    // can see must grant that role something
    let rbac = RbacSystem::new();

    for role in ALL_ROLES {
        let user = user_with_role(role);
        for section in filter_sections(default_toolbar(), Some(&user)) {
            for sub_tab in &section.sub_tabs {
                let grant = resolve_sub_tab_access(&rbac, sub_tab, Some(&user));
                assert!(
                    grant.allows_access(),
                    "role {} sees {} but resolves to no access",
                    role,
                    sub_tab.id
                );
            }
        }
    }
}

#[test]
fn ceo_toolbar_walkthrough() {
    let rbac = RbacSystem::new();
    let ceo = user_with_role(Role::Ceo);

    let visible = filter_sections(default_toolbar(), Some(&ceo));
    let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "dashboard",
            "events",
            "budgets",
            "marketing",
            "files",
            "pods",
            "administration"
        ]
    );

    let administration = visible.iter().find(|s| s.id == "administration").unwrap();
    let review = administration
        .sub_tabs
        .iter()
        .find(|t| t.id == "access-review")
        .unwrap();
    let grant = resolve_sub_tab_access(&rbac, review, Some(&ceo));
    assert_eq!(grant.level, AccessLevel::Readonly);
    assert_eq!(grant.badge.as_deref(), Some("Read"));

    let budgets = visible.iter().find(|s| s.id == "budgets").unwrap();
    let reports = budgets
        .sub_tabs
        .iter()
        .find(|t| t.id == "financial-reports")
        .unwrap();
    let grant = resolve_sub_tab_access(&rbac, reports, Some(&ceo));
    assert_eq!(grant.level, AccessLevel::Full);
}

#[test]
fn sales_rep_gets_limited_financial_reports() {
    let rbac = RbacSystem::new();
    let ae = user_with_role(Role::SalesRepresentative);

    let visible = filter_sections(default_toolbar(), Some(&ae));
    let budgets = visible.iter().find(|s| s.id == "budgets").unwrap();

    // The AE group reaches the tab but the table caps it at limited
    let reports = budgets
        .sub_tabs
        .iter()
        .find(|t| t.id == "financial-reports")
        .unwrap();
    let grant = resolve_sub_tab_access(&rbac, reports, Some(&ae));
    assert_eq!(grant.level, AccessLevel::Limited);
    assert_eq!(grant.description, "Own-account figures only");

    // And the overview tab is not offered to the AE group at all
    assert!(!budgets.sub_tabs.iter().any(|t| t.id == "budget-overview"));
}

#[test]
fn logistics_staff_see_operations_surface_only() {
    let logistics = user_with_role(Role::LogisticsStaff);
    let visible = filter_sections(default_toolbar(), Some(&logistics));
    let ids: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();

    assert_eq!(ids, vec!["dashboard", "events", "files", "pods"]);

    // Within events, approvals and archive are hidden
    let events = visible.iter().find(|s| s.id == "events").unwrap();
    let tabs: Vec<&str> = events.sub_tabs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(tabs, vec!["event-calendar"]);
}

#[test]
fn unauthenticated_toolbar_is_empty() {
    assert!(filter_sections(default_toolbar(), None).is_empty());
}
