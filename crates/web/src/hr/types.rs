//! Wire types for the HR API.
//!
//! The backend speaks camelCase JSON; every record here mirrors one response
//! or request body exactly. Domain conversions live in `crate::models`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crewdesk_core::{EmployeeId, LeaveRequestId, LeaveStatus, Role, UserId, WorkLogId};

/// Body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login payload: the new bearer token together with the user it
/// belongs to, returned atomically in a single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    pub user: UserRecord,
}

/// The account record returned by `GET /user/me` and inside [`LoginGrant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Whether the one-time profile setup has been completed.
    pub set_profile_setup: bool,
    pub created_at: DateTime<Utc>,
    pub enabled: bool,
}

/// An employee's own profile, from `GET /api/profile/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

/// Body for `POST /api/profile/setup` and `PUT /api/profile/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

/// A leave request as seen by its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestRecord {
    pub id: LeaveRequestId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Body for `POST /api/employee/leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// A work log entry as seen by its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogRecord {
    pub id: WorkLogId,
    pub work_date: NaiveDate,
    pub task_summary: String,
    pub hours_worked: f64,
    pub comments: String,
    pub submitted_at: DateTime<Utc>,
}

/// Body for `POST /api/employee/worklogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogInput {
    pub work_date: NaiveDate,
    pub task_summary: String,
    pub hours_worked: f64,
    pub comments: String,
}

/// An employee record from the admin area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub position: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}

/// Body for `POST /api/admin/employees` and `PUT /api/admin/employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub position: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

/// Employee identity nested inside admin leave/work-log rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub full_name: String,
    pub department: String,
    pub position: String,
}

/// A leave request joined with its owner, from `GET /api/admin/leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLeaveRecord {
    pub id: LeaveRequestId,
    pub employee: EmployeeSummary,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub submitted_at: DateTime<Utc>,
}

/// A work log joined with its owner, from `GET /api/admin/worklogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminWorkLogRecord {
    pub id: WorkLogId,
    pub employee: EmployeeSummary,
    pub work_date: NaiveDate,
    pub task_summary: String,
    pub hours_worked: f64,
    pub comments: String,
    pub submitted_at: DateTime<Utc>,
}

/// Body for `POST /api/auth/register-employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeInput {
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_decodes_camel_case() {
        let json = r#"{
            "id": 3,
            "username": "alice",
            "email": "alice@example.com",
            "role": "ADMIN",
            "setProfileSetup": true,
            "createdAt": "2025-02-10T09:30:00Z",
            "enabled": true
        }"#;

        let record: UserRecord = serde_json::from_str(json).expect("valid user record");
        assert_eq!(record.id, UserId::new(3));
        assert_eq!(record.role, Role::Admin);
        assert!(record.set_profile_setup);
        assert!(record.enabled);
    }

    #[test]
    fn test_login_grant_decodes_token_and_user_together() {
        let json = r#"{
            "token": "t1",
            "user": {
                "id": 8,
                "username": "bob",
                "email": "bob@example.com",
                "role": "EMPLOYEE",
                "setProfileSetup": false,
                "createdAt": "2025-03-01T08:00:00Z",
                "enabled": true
            }
        }"#;

        let grant: LoginGrant = serde_json::from_str(json).expect("valid login grant");
        assert_eq!(grant.token, "t1");
        assert_eq!(grant.user.role, Role::Employee);
        assert!(!grant.user.set_profile_setup);
    }

    #[test]
    fn test_leave_record_decodes_status_tag() {
        let json = r#"{
            "id": 12,
            "startDate": "2025-06-02",
            "endDate": "2025-06-06",
            "reason": "vacation",
            "status": "APPROVED",
            "submittedAt": "2025-05-20T12:00:00Z"
        }"#;

        let record: LeaveRequestRecord = serde_json::from_str(json).expect("valid leave record");
        assert_eq!(record.status, LeaveStatus::Approved);
        assert_eq!(record.start_date.to_string(), "2025-06-02");
    }

    #[test]
    fn test_employee_input_encodes_camel_case() {
        let input = EmployeeInput {
            full_name: "Dana Park".to_string(),
            email: "dana@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            address: "12 Main St".to_string(),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            salary: Decimal::new(72_500_00, 2),
            hire_date: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
        };

        let json = serde_json::to_value(&input).expect("serializable");
        assert!(json.get("fullName").is_some());
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("hireDate").is_some());
        assert!(json.get("full_name").is_none());
    }
}
