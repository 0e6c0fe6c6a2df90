//! Shared test fixtures

use pulseboard_rs::{Role, User};

/// Every canonical role, in declaration order
pub const ALL_ROLES: [Role; 14] = [
    Role::Ceo,
    Role::Administrator,
    Role::Accountant,
    Role::HeadOfDesign,
    Role::Designer,
    Role::ItManager,
    Role::ItTechnicalStaff,
    Role::TeamLead,
    Role::EventCoordinator,
    Role::MarketingStaff,
    Role::LogisticsStaff,
    Role::SalesRepresentative,
    Role::ProductionStaff,
    Role::AccreditationStaff,
];

/// Build a test user with the given role
pub fn user_with_role(role: Role) -> User {
    User::new("fixture_user", "fixture@pulseboard.example", role)
}
