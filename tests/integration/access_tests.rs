//! End-to-end access system tests

use pulseboard_rs::{AccessConfig, AccessLevel, AccessSystem, PermissionVerb, Role, RoleGroup};

use crate::common::{ALL_ROLES, user_with_role};

#[test]
fn sign_in_authorize_switch_sign_out_flow() {
    let system = AccessSystem::new(&AccessConfig::default());

    // Nobody signed in: everything denied
    let check = system.authorize(None, PermissionVerb::Read);
    assert!(!check.granted);

    // Administrator signs in and may delete
    system
        .session()
        .sign_in(user_with_role(Role::Administrator));
    let admin = system.session().current().unwrap();
    assert!(
        system
            .authorize(Some(admin.as_ref()), PermissionVerb::Delete)
            .granted
    );
    assert!(system.is_admin(&admin));

    // Switch to logistics staff: coarse verbs vanish with the old user
    system
        .session()
        .switch_user(user_with_role(Role::LogisticsStaff));
    let staff = system.session().current().unwrap();
    assert!(
        !system
            .authorize(Some(staff.as_ref()), PermissionVerb::Read)
            .granted
    );
    assert!(!system.is_admin(&staff));

    // Sign out: back to denied
    system.session().sign_out();
    assert!(system.session().current().is_none());
}

#[test]
fn admin_override_grants_coarse_but_not_resources_or_capabilities() {
    let system = AccessSystem::new(&AccessConfig::default());
    let ceo = user_with_role(Role::Ceo);

    // Coarse path: Admin verb short-circuits everything
    for verb in PermissionVerb::ALL {
        assert!(system.rbac().has_permission(Some(&ceo), verb));
    }

    // Capability path ignores the override
    assert!(!system.rbac().has_capability(Some(&ceo), "create_events"));

    // Resource path ignores it too: the CEO group simply has its own entry
    let grant = system
        .rbac()
        .resource_access("user-management", RoleGroup::Ceo);
    assert_eq!(grant.level, AccessLevel::Readonly);
}

#[test]
fn capability_surface_matrix_spot_checks() {
    let system = AccessSystem::new(&AccessConfig::default());
    let rbac = system.rbac();

    let marketing = user_with_role(Role::MarketingStaff);
    assert!(rbac.can_send_campaigns(Some(&marketing)));
    assert!(!rbac.can_approve_events(Some(&marketing)));

    let coordinator = user_with_role(Role::EventCoordinator);
    assert!(rbac.can_create_events(Some(&coordinator)));
    assert!(rbac.can_view_team_tasks(Some(&coordinator)));
    assert!(!rbac.can_export_reports(Some(&coordinator)));

    let it_manager = user_with_role(Role::ItManager);
    assert!(rbac.can_manage_users(Some(&it_manager)));
    assert!(rbac.can_manage_uploads(Some(&it_manager)));
    assert!(!rbac.can_edit_budgets(Some(&it_manager)));

    let ceo = user_with_role(Role::Ceo);
    assert!(rbac.can_approve_events(Some(&ceo)));
    assert!(rbac.can_view_budgets_full(Some(&ceo)));
    assert!(!rbac.can_manage_pods(Some(&ceo)));
}

#[test]
fn every_role_can_view_events() {
    let system = AccessSystem::new(&AccessConfig::default());

    for role in ALL_ROLES {
        let user = user_with_role(role);
        assert!(
            system.rbac().has_capability(Some(&user), "view_events"),
            "role {} cannot view events",
            role
        );
    }
}

#[test]
fn repeated_checks_are_stable_across_the_surface() {
    let system = AccessSystem::new(&AccessConfig::default());

    for role in ALL_ROLES {
        let user = user_with_role(role);
        for verb in PermissionVerb::ALL {
            assert_eq!(
                system.rbac().has_permission(Some(&user), verb),
                system.rbac().has_permission(Some(&user), verb)
            );
        }
        assert_eq!(
            system.rbac().can_view_team_tasks(Some(&user)),
            system.rbac().can_view_team_tasks(Some(&user))
        );
    }
}
