//! # Pulseboard-RS
//!
//! Role-based access control core for a healthcare event administration
//! dashboard. Feature views ask this crate what a user may see and do;
//! everything else (rendering, forms, notifications) lives with the
//! embedding application.
//!
//! ## Features
//!
//! - **Coarse verb checks**: read/write/delete with an admin override,
//!   gating toolbar affordances per role group
//! - **Named capabilities**: fine-grained per-role grants with no override,
//!   gating feature actions
//! - **Resource access grants**: full/readonly/limited/none levels with
//!   descriptions and badges for sensitive resources
//! - **Navigation filtering**: a static section/sub-tab tree pruned to what
//!   the current user's role may see
//!
//! ## Quick Start
//!
//! ```rust
//! use pulseboard_rs::{AccessConfig, AccessSystem, PermissionVerb, Role, User};
//! use pulseboard_rs::navigation::{default_toolbar, filter_sections};
//!
//! let system = AccessSystem::new(&AccessConfig::default());
//! let user = User::new("jdoe", "jdoe@example.com", Role::TeamLead);
//!
//! // Coarse toolbar gating
//! assert!(system.rbac().has_permission(Some(&user), PermissionVerb::Write));
//!
//! // Feature gating through named capabilities
//! assert!(system.rbac().can_create_events(Some(&user)));
//! assert!(!system.rbac().can_manage_users(Some(&user)));
//!
//! // Navigation filtered to the user's role
//! let visible = filter_sections(default_toolbar(), Some(&user));
//! assert!(!visible.is_empty());
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod navigation;
pub mod utils;

// Re-export main types
pub use auth::{
    AccessGrant, AccessLevel, AccessSystem, PermissionCheck, PermissionVerb, RbacSystem, Session,
};
pub use config::{AccessConfig, Config, LoggingConfig};
pub use core::models::{Role, RoleGroup, User, UserStatus};
pub use navigation::{SubTab, ToolbarSection};
pub use utils::error::{BoardError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
