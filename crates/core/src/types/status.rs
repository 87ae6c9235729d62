//! Closed enumerations shared across the front-end.
//!
//! The HR API transmits these as SCREAMING_SNAKE_CASE string tags; on this
//! side they are closed enums so route matching stays exhaustive.

use serde::{Deserialize, Serialize};

/// Account role controlling which area of the app a user may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Self-service area: own profile, leave requests, work logs.
    Employee,
    /// Management area: employee records, leave approval, all work logs.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "EMPLOYEE"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYEE" => Ok(Self::Employee),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Review state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_role_display_matches_wire_tag() {
        assert_eq!(Role::Employee.to_string(), "EMPLOYEE");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("ADMIN"), Ok(Role::Admin));
        assert_eq!(Role::from_str("EMPLOYEE"), Ok(Role::Employee));
        assert!(Role::from_str("employee").is_err());
    }

    #[test]
    fn test_leave_status_defaults_to_pending() {
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
    }
}
