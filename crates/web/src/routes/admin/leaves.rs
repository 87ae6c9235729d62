//! Admin leave request management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};

use crewdesk_core::{LeaveRequestId, LeaveStatus};

use crate::error::AppError;
use crate::filters;
use crate::hr::HrError;
use crate::middleware::RequireAdmin;
use crate::routes::{Chrome, MessageQuery};
use crate::state::AppState;

/// Leave request display data, joined with its owner.
pub struct LeaveView {
    pub id: i64,
    pub employee_name: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub submitted: String,
    pub pending: bool,
}

/// Leave management page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/leaves.html")]
pub struct LeavesTemplate {
    pub chrome: Chrome,
    pub rows: Vec<LeaveView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Display every leave request.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> Result<LeavesTemplate, AppError> {
    let rows = state
        .hr()
        .all_leaves(&viewer.credential)
        .await?
        .into_iter()
        .map(|record| LeaveView {
            id: record.id.as_i64(),
            employee_name: record.employee.full_name,
            department: record.employee.department,
            position: record.employee.position,
            start_date: record.start_date.to_string(),
            end_date: record.end_date.to_string(),
            reason: record.reason,
            status: record.status.to_string(),
            submitted: record.submitted_at.format("%Y-%m-%d").to_string(),
            pending: record.status == LeaveStatus::Pending,
        })
        .collect();

    Ok(LeavesTemplate {
        chrome: Chrome::from(&viewer.user),
        rows,
        notice: query.success.as_deref().map(|code| {
            match code {
                "rejected" => "The leave request has been rejected.",
                _ => "The leave request has been approved.",
            }
            .to_string()
        }),
        error: query
            .error
            .as_deref()
            .map(|_| "The request could not be completed. Please try again.".to_string()),
    })
}

/// Approve a pending leave request.
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .approve_leave(&viewer.credential, LeaveRequestId::new(id))
        .await
    {
        Ok(()) => Ok(Redirect::to("/admin/leaves?success=approved")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, leave_id = id, "leave approval failed");
            Ok(Redirect::to("/admin/leaves?error=approve"))
        }
    }
}

/// Reject a pending leave request.
pub async fn reject(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .reject_leave(&viewer.credential, LeaveRequestId::new(id))
        .await
    {
        Ok(()) => Ok(Redirect::to("/admin/leaves?success=rejected")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, leave_id = id, "leave rejection failed");
            Ok(Redirect::to("/admin/leaves?error=reject"))
        }
    }
}
