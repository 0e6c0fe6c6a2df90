//! Configuration loading tests

use anyhow::Result;
use pulseboard_rs::{AccessSystem, Config, PermissionVerb, Role};

use crate::common::user_with_role;

#[test]
fn yaml_config_drives_the_access_system() -> Result<()> {
    let yaml = r#"
access:
  enabled: true
  default_role: event_coordinator
  admin_roles: ["admin", "ceo", "it"]
logging:
  level: debug
"#;
    let config = Config::from_yaml_str(yaml)?;
    let system = AccessSystem::new(&config.access);

    assert_eq!(system.default_role(), Role::EventCoordinator);

    // IT joined the configured admin groups
    let it_user = user_with_role(Role::ItManager);
    assert!(system.is_admin(&it_user));

    // Configured admin groups do not grant coarse verbs by themselves
    assert!(!system.rbac().has_permission(Some(&it_user), PermissionVerb::Admin));
    Ok(())
}

#[test]
fn disabled_access_control_grants_everything() -> Result<()> {
    let config = Config::from_yaml_str("access:\n  enabled: false\n")?;
    let system = AccessSystem::new(&config.access);

    let staff = user_with_role(Role::LogisticsStaff);
    let check = system.authorize(Some(&staff), PermissionVerb::Delete);
    assert!(check.granted);

    // The pure resolver still answers from the tables
    assert!(!system.rbac().has_permission(Some(&staff), PermissionVerb::Delete));
    Ok(())
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(Config::from_yaml_str("access:\n  default_role: warlock\n").is_err());
    assert!(Config::from_yaml_str("access:\n  admin_roles: []\n").is_err());
    assert!(Config::from_yaml_str("logging:\n  level: shouting\n").is_err());
    assert!(Config::from_yaml_str("access: [not, a, map]\n").is_err());
}

#[test]
fn merged_config_layers_overrides() -> Result<()> {
    let base = Config::default();
    let overlay = Config::from_yaml_str("access:\n  default_role: accountant\n")?;

    let merged = base.merge(overlay);
    assert_eq!(merged.access.default_role, "accountant");
    assert!(merged.access.enabled);
    Ok(())
}
