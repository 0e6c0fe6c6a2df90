//! Role-Based Access Control (RBAC) system
//!
//! Static role, resource, and capability tables plus the resolution
//! functions that turn a user and a request into a grant or denial.

mod capabilities;
mod permissions;
mod system;
mod types;

// Re-export public types and structs
pub use system::RbacSystem;
pub use types::{AccessGrant, AccessLevel, PermissionCheck, PermissionVerb};
