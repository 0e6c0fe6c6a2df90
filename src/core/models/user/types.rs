//! Core user types and enums

use crate::utils::error::BoardError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
///
/// Identity fields only; credentials, preferences, and usage tracking live
/// with the session/identity collaborator that supplies this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// User role
    pub role: Role,
    /// User status
    pub status: UserStatus,
    /// Last login timestamp
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    /// Create an active user with a fresh id
    pub fn new<S: Into<String>>(username: S, email: S, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            display_name: None,
            role,
            status: UserStatus::Active,
            last_login_at: None,
        }
    }
}

/// Canonical user role
///
/// The single role vocabulary for the dashboard. Capability grants are keyed
/// by this enum; toolbar and resource tables are keyed by the coarser
/// [`RoleGroup`] every role maps onto via [`Role::group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Chief executive
    Ceo,
    /// System administrator
    Administrator,
    /// Accountant
    Accountant,
    /// Head of the design department
    HeadOfDesign,
    /// Designer
    Designer,
    /// IT manager
    ItManager,
    /// IT technical staff
    ItTechnicalStaff,
    /// Event team lead
    TeamLead,
    /// Event coordinator
    EventCoordinator,
    /// Marketing staff
    MarketingStaff,
    /// Logistics staff
    LogisticsStaff,
    /// Sales representative (account executive)
    SalesRepresentative,
    /// Production staff
    ProductionStaff,
    /// Accreditation staff
    AccreditationStaff,
}

impl Role {
    /// The coarse toolbar group this role belongs to
    ///
    /// Total and surjective: every role resolves to exactly one group, and
    /// every group is reachable. Staff roles without a group of their own
    /// fold into the department that owns their toolbar surface
    /// (accreditation and production staff work the event-operations desks,
    /// so they land in [`RoleGroup::Logistics`]).
    pub fn group(&self) -> RoleGroup {
        match self {
            Role::Ceo => RoleGroup::Ceo,
            Role::Administrator => RoleGroup::Admin,
            Role::Accountant => RoleGroup::Finance,
            Role::HeadOfDesign | Role::Designer => RoleGroup::Designer,
            Role::ItManager | Role::ItTechnicalStaff => RoleGroup::It,
            Role::TeamLead | Role::EventCoordinator => RoleGroup::TeamLead,
            Role::MarketingStaff => RoleGroup::Marketing,
            Role::LogisticsStaff | Role::ProductionStaff | Role::AccreditationStaff => {
                RoleGroup::Logistics
            }
            Role::SalesRepresentative => RoleGroup::Ae,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Ceo => "ceo",
            Role::Administrator => "administrator",
            Role::Accountant => "accountant",
            Role::HeadOfDesign => "head_of_design",
            Role::Designer => "designer",
            Role::ItManager => "it_manager",
            Role::ItTechnicalStaff => "it_technical_staff",
            Role::TeamLead => "team_lead",
            Role::EventCoordinator => "event_coordinator",
            Role::MarketingStaff => "marketing_staff",
            Role::LogisticsStaff => "logistics_staff",
            Role::SalesRepresentative => "sales_representative",
            Role::ProductionStaff => "production_staff",
            Role::AccreditationStaff => "accreditation_staff",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Role {
    type Err = BoardError;

    /// Parse a canonical role name or one of the legacy coarse spellings
    ///
    /// The legacy toolbar vocabulary (`admin`, `ae`, `it`, `finance`,
    /// `marketing`, `logistics`) is accepted here and nowhere else; inside
    /// the crate only the canonical enum circulates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceo" => Ok(Role::Ceo),
            "administrator" => Ok(Role::Administrator),
            "accountant" => Ok(Role::Accountant),
            "head_of_design" => Ok(Role::HeadOfDesign),
            "designer" => Ok(Role::Designer),
            "it_manager" => Ok(Role::ItManager),
            "it_technical_staff" => Ok(Role::ItTechnicalStaff),
            "team_lead" => Ok(Role::TeamLead),
            "event_coordinator" => Ok(Role::EventCoordinator),
            "marketing_staff" => Ok(Role::MarketingStaff),
            "logistics_staff" => Ok(Role::LogisticsStaff),
            "sales_representative" => Ok(Role::SalesRepresentative),
            "production_staff" => Ok(Role::ProductionStaff),
            "accreditation_staff" => Ok(Role::AccreditationStaff),
            // Legacy toolbar spellings
            "admin" => Ok(Role::Administrator),
            "finance" => Ok(Role::Accountant),
            "it" => Ok(Role::ItTechnicalStaff),
            "ae" => Ok(Role::SalesRepresentative),
            "marketing" => Ok(Role::MarketingStaff),
            "logistics" => Ok(Role::LogisticsStaff),
            other => Err(BoardError::unknown_role(other)),
        }
    }
}

/// Coarse toolbar role group
///
/// Keys the role-permission and resource-access tables and the
/// `required_roles` lists of the toolbar tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    /// Chief executive
    Ceo,
    /// Administration
    Admin,
    /// Marketing department
    Marketing,
    /// Account executives
    Ae,
    /// Design department
    Designer,
    /// Event operations and logistics
    Logistics,
    /// IT department
    It,
    /// Event team leads
    TeamLead,
    /// Finance department
    Finance,
}

impl RoleGroup {
    /// All toolbar groups, in declaration order
    pub const ALL: [RoleGroup; 9] = [
        RoleGroup::Ceo,
        RoleGroup::Admin,
        RoleGroup::Marketing,
        RoleGroup::Ae,
        RoleGroup::Designer,
        RoleGroup::Logistics,
        RoleGroup::It,
        RoleGroup::TeamLead,
        RoleGroup::Finance,
    ];
}

impl std::fmt::Display for RoleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoleGroup::Ceo => "ceo",
            RoleGroup::Admin => "admin",
            RoleGroup::Marketing => "marketing",
            RoleGroup::Ae => "ae",
            RoleGroup::Designer => "designer",
            RoleGroup::Logistics => "logistics",
            RoleGroup::It => "it",
            RoleGroup::TeamLead => "team_lead",
            RoleGroup::Finance => "finance",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for RoleGroup {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceo" => Ok(RoleGroup::Ceo),
            "admin" => Ok(RoleGroup::Admin),
            "marketing" => Ok(RoleGroup::Marketing),
            "ae" => Ok(RoleGroup::Ae),
            "designer" => Ok(RoleGroup::Designer),
            "logistics" => Ok(RoleGroup::Logistics),
            "it" => Ok(RoleGroup::It),
            "team_lead" => Ok(RoleGroup::TeamLead),
            "finance" => Ok(RoleGroup::Finance),
            other => Err(BoardError::unknown_role(other)),
        }
    }
}

/// User status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Active user
    Active,
    /// Inactive user
    Inactive,
    /// Suspended user
    Suspended,
}
