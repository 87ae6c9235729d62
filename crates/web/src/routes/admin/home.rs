//! Admin home: company overview and employee account registration.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;

use crewdesk_core::{LeaveStatus, Role};

use crate::error::AppError;
use crate::filters;
use crate::hr::{HrError, RegisterEmployeeInput};
use crate::middleware::RequireAdmin;
use crate::routes::{Chrome, MessageQuery};
use crate::state::AppState;

/// Employee account registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Admin home template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/home.html")]
pub struct AdminHomeTemplate {
    pub chrome: Chrome,
    pub employee_count: usize,
    pub active_count: usize,
    pub pending_leaves: usize,
    pub worklog_count: usize,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Display the admin overview.
///
/// Counts are best-effort: a backend hiccup renders zeros with a notice
/// rather than failing the page.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> Result<AdminHomeTemplate, AppError> {
    let hr = state.hr();

    let (employees, leaves, worklogs) = tokio::join!(
        hr.employees(&viewer.credential),
        hr.all_leaves(&viewer.credential),
        hr.all_worklogs(&viewer.credential),
    );

    if matches!(employees, Err(HrError::Unauthorized))
        || matches!(leaves, Err(HrError::Unauthorized))
        || matches!(worklogs, Err(HrError::Unauthorized))
    {
        return Err(AppError::from(HrError::Unauthorized));
    }

    let mut degraded = false;
    let employees = employees.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to fetch employees for overview");
        degraded = true;
        Vec::new()
    });
    let leaves = leaves.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to fetch leaves for overview");
        degraded = true;
        Vec::new()
    });
    let worklogs = worklogs.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to fetch work logs for overview");
        degraded = true;
        Vec::new()
    });

    let error = if degraded {
        Some("Some figures could not be loaded right now.".to_string())
    } else {
        query
            .error
            .as_deref()
            .map(|_| "Failed to register the employee. Please try again.".to_string())
    };

    Ok(AdminHomeTemplate {
        chrome: Chrome::from(&viewer.user),
        employee_count: employees.len(),
        active_count: employees.iter().filter(|e| e.is_active).count(),
        pending_leaves: leaves
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .count(),
        worklog_count: worklogs.len(),
        notice: query.success.as_deref().map(|_| {
            "Employee registered. They will receive login credentials via email.".to_string()
        }),
        error,
    })
}

/// Register a new employee account.
pub async fn register(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    let role = form.role.parse::<Role>().map_err(AppError::BadRequest)?;

    let input = RegisterEmployeeInput {
        username: form.username,
        email: form.email,
        role,
    };

    match state.hr().register_employee(&viewer.credential, &input).await {
        Ok(()) => Ok(Redirect::to("/admin?success=registered")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "employee registration failed");
            Ok(Redirect::to("/admin?error=register"))
        }
    }
}
