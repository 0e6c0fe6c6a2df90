//! Navigation filtering and sub-tab access resolution

use crate::auth::rbac::{AccessGrant, AccessLevel, RbacSystem};
use crate::core::models::User;

use super::types::{SubTab, ToolbarSection};

/// Filter the toolbar tree down to what a user may see
///
/// Sections are kept when their `required_roles` contain the user's group
/// and at least one sub-tab survives the same test; the result is ordered by
/// the declared `order` key regardless of input order. An unauthenticated
/// user sees nothing. The input tree is never mutated.
pub fn filter_sections(sections: &[ToolbarSection], user: Option<&User>) -> Vec<ToolbarSection> {
    let Some(user) = user else {
        return Vec::new();
    };
    let group = user.role.group();

    let mut visible: Vec<ToolbarSection> = sections
        .iter()
        .filter(|section| section.required_roles.contains(&group))
        .filter_map(|section| {
            let sub_tabs: Vec<SubTab> = section
                .sub_tabs
                .iter()
                .filter(|tab| tab.required_roles.contains(&group))
                .cloned()
                .collect();

            if sub_tabs.is_empty() {
                return None;
            }
            Some(ToolbarSection {
                sub_tabs,
                ..section.clone()
            })
        })
        .collect();

    visible.sort_by_key(|section| section.order);
    visible
}

/// Resolve the effective access grant for a sub-tab
///
/// Two-tier fallback: a non-full grant from the resource-access table wins
/// outright; a full grant defers to the sub-tab's declared default, with the
/// badge synthesized from the level.
pub fn resolve_sub_tab_access(
    rbac: &RbacSystem,
    sub_tab: &SubTab,
    user: Option<&User>,
) -> AccessGrant {
    let Some(user) = user else {
        return AccessGrant::no_access();
    };

    let grant = rbac.resource_access(&sub_tab.id, user.role.group());
    if grant.level != AccessLevel::Full {
        return grant;
    }

    match sub_tab.default_access {
        AccessLevel::Full => grant,
        AccessLevel::Readonly => {
            AccessGrant::new(AccessLevel::Readonly, "Read-only view").with_badge("Read")
        }
        AccessLevel::Limited => {
            AccessGrant::new(AccessLevel::Limited, "Limited access").with_badge("Limited")
        }
        AccessLevel::None => AccessGrant::no_access(),
    }
}
