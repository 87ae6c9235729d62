//! Admin employee record management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crewdesk_core::EmployeeId;

use crate::error::AppError;
use crate::filters;
use crate::hr::{EmployeeInput, HrError};
use crate::middleware::RequireAdmin;
use crate::routes::{Chrome, MessageQuery};
use crate::state::AppState;

/// Employee record form data. Salary and hire date arrive as strings from
/// the form inputs and are parsed into their typed wire shapes.
#[derive(Debug, Deserialize)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeForm {
    fn into_input(self) -> Result<EmployeeInput, AppError> {
        let salary = self
            .salary
            .parse::<Decimal>()
            .map_err(|_| AppError::BadRequest("invalid salary".to_string()))?;
        let hire_date = self
            .hire_date
            .parse::<NaiveDate>()
            .map_err(|_| AppError::BadRequest("invalid hire date".to_string()))?;

        Ok(EmployeeInput {
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            department: self.department,
            position: self.position,
            salary,
            hire_date,
        })
    }
}

/// Employee record display data.
pub struct EmployeeView {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
    pub is_active: bool,
}

/// Employee records page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/employees.html")]
pub struct EmployeesTemplate {
    pub chrome: Chrome,
    pub rows: Vec<EmployeeView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Display all employee records with the add form.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> Result<EmployeesTemplate, AppError> {
    let rows = state
        .hr()
        .employees(&viewer.credential)
        .await?
        .into_iter()
        .map(|record| EmployeeView {
            id: record.id.as_i64(),
            full_name: record.full_name,
            email: record.email,
            phone_number: record.phone_number,
            address: record.address,
            department: record.department,
            position: record.position,
            salary: record.salary.to_string(),
            hire_date: record.hire_date.to_string(),
            is_active: record.is_active,
        })
        .collect();

    Ok(EmployeesTemplate {
        chrome: Chrome::from(&viewer.user),
        rows,
        notice: query.success.as_deref().map(|code| {
            match code {
                "updated" => "Employee profile has been updated.",
                "deleted" => "Employee has been removed.",
                _ => "Employee has been added.",
            }
            .to_string()
        }),
        error: query
            .error
            .as_deref()
            .map(|_| "Failed to save employee data. Please try again.".to_string()),
    })
}

/// Create an employee record.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Form(form): Form<EmployeeForm>,
) -> Result<Redirect, AppError> {
    let input = form.into_input()?;

    match state.hr().create_employee(&viewer.credential, &input).await {
        Ok(()) => Ok(Redirect::to("/admin/employees?success=created")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "employee creation failed");
            Ok(Redirect::to("/admin/employees?error=create"))
        }
    }
}

/// Update an employee record.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<EmployeeForm>,
) -> Result<Redirect, AppError> {
    let input = form.into_input()?;

    match state
        .hr()
        .update_employee(&viewer.credential, EmployeeId::new(id), &input)
        .await
    {
        Ok(()) => Ok(Redirect::to("/admin/employees?success=updated")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, employee_id = id, "employee update failed");
            Ok(Redirect::to("/admin/employees?error=update"))
        }
    }
}

/// Delete an employee record.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .delete_employee(&viewer.credential, EmployeeId::new(id))
        .await
    {
        Ok(()) => Ok(Redirect::to("/admin/employees?success=deleted")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, employee_id = id, "employee deletion failed");
            Ok(Redirect::to("/admin/employees?error=delete"))
        }
    }
}
