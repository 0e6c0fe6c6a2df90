//! Permission-aware navigation toolbar
//!
//! A static tree of sections and sub-tabs, filtered per user at render time.

mod filter;
mod toolbar;
mod types;

// Re-export public types and functions
pub use filter::{filter_sections, resolve_sub_tab_access};
pub use toolbar::default_toolbar;
pub use types::{SubTab, ToolbarSection};
