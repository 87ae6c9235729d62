//! Employee leave request routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crewdesk_core::{LeaveRequestId, LeaveStatus};

use crate::error::AppError;
use crate::filters;
use crate::hr::{HrError, LeaveInput};
use crate::middleware::RequireEmployee;
use crate::routes::{Chrome, MessageQuery};
use crate::state::AppState;

/// Leave request form data. Dates arrive as `YYYY-MM-DD` from the date
/// inputs.
#[derive(Debug, Deserialize)]
pub struct LeaveForm {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Leave request display data.
pub struct LeaveView {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub submitted: String,
    pub pending: bool,
}

/// Leave requests page template.
#[derive(Template, WebTemplate)]
#[template(path = "employee/leave.html")]
pub struct LeaveTemplate {
    pub chrome: Chrome,
    pub rows: Vec<LeaveView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest(format!("invalid {field}")))
}

/// Display the caller's leave requests with the apply form.
pub async fn index(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Query(query): Query<MessageQuery>,
) -> Result<LeaveTemplate, AppError> {
    let rows = state
        .hr()
        .my_leaves(&viewer.credential)
        .await?
        .into_iter()
        .map(|record| LeaveView {
            id: record.id.as_i64(),
            start_date: record.start_date.to_string(),
            end_date: record.end_date.to_string(),
            reason: record.reason,
            status: record.status.to_string(),
            submitted: record.submitted_at.format("%Y-%m-%d").to_string(),
            pending: record.status == LeaveStatus::Pending,
        })
        .collect();

    let notice = query.success.as_deref().map(|code| {
        match code {
            "cancelled" => "Your leave request has been cancelled.",
            _ => "Your leave request has been submitted for approval.",
        }
        .to_string()
    });

    Ok(LeaveTemplate {
        chrome: Chrome::from(&viewer.user),
        rows,
        notice,
        error: query
            .error
            .as_deref()
            .map(|_| "The request could not be completed. Please try again.".to_string()),
    })
}

/// Handle leave request submission.
pub async fn submit(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Form(form): Form<LeaveForm>,
) -> Result<Redirect, AppError> {
    let input = LeaveInput {
        start_date: parse_date("start date", &form.start_date)?,
        end_date: parse_date("end date", &form.end_date)?,
        reason: form.reason,
    };

    match state.hr().submit_leave(&viewer.credential, &input).await {
        Ok(()) => Ok(Redirect::to("/employee/leave?success=submitted")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "leave submission failed");
            Ok(Redirect::to("/employee/leave?error=submit"))
        }
    }
}

/// Cancel one of the caller's pending leave requests.
pub async fn cancel(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .cancel_leave(&viewer.credential, LeaveRequestId::new(id))
        .await
    {
        Ok(()) => Ok(Redirect::to("/employee/leave?success=cancelled")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "leave cancellation failed");
            Ok(Redirect::to("/employee/leave?error=cancel"))
        }
    }
}
