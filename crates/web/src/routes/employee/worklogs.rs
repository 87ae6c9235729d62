//! Employee work log routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::filters;
use crate::hr::{HrError, WorkLogInput};
use crate::middleware::RequireEmployee;
use crate::routes::{Chrome, MessageQuery};
use crate::state::AppState;

/// Work log form data.
#[derive(Debug, Deserialize)]
pub struct WorkLogForm {
    pub work_date: String,
    pub task_summary: String,
    pub hours_worked: String,
    pub comments: String,
}

/// Work log display data.
pub struct WorkLogView {
    pub work_date: String,
    pub task_summary: String,
    pub hours_worked: String,
    pub comments: String,
    pub submitted: String,
}

/// Work logs page template.
#[derive(Template, WebTemplate)]
#[template(path = "employee/worklogs.html")]
pub struct WorkLogsTemplate {
    pub chrome: Chrome,
    pub rows: Vec<WorkLogView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Display the caller's work logs with the entry form.
pub async fn index(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Query(query): Query<MessageQuery>,
) -> Result<WorkLogsTemplate, AppError> {
    let rows = state
        .hr()
        .my_worklogs(&viewer.credential)
        .await?
        .into_iter()
        .map(|record| WorkLogView {
            work_date: record.work_date.to_string(),
            task_summary: record.task_summary,
            hours_worked: format!("{}", record.hours_worked),
            comments: record.comments,
            submitted: record.submitted_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(WorkLogsTemplate {
        chrome: Chrome::from(&viewer.user),
        rows,
        notice: query
            .success
            .as_deref()
            .map(|_| "Your work log has been recorded.".to_string()),
        error: query
            .error
            .as_deref()
            .map(|_| "The work log could not be submitted. Please try again.".to_string()),
    })
}

/// Handle work log submission.
pub async fn submit(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Form(form): Form<WorkLogForm>,
) -> Result<Redirect, AppError> {
    let work_date = form
        .work_date
        .parse::<NaiveDate>()
        .map_err(|_| AppError::BadRequest("invalid work date".to_string()))?;
    let hours_worked = form
        .hours_worked
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest("invalid hours".to_string()))?;

    let input = WorkLogInput {
        work_date,
        task_summary: form.task_summary,
        hours_worked,
        comments: form.comments,
    };

    match state.hr().submit_worklog(&viewer.credential, &input).await {
        Ok(()) => Ok(Redirect::to("/employee/worklogs?success=submitted")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "work log submission failed");
            Ok(Redirect::to("/employee/worklogs?error=submit"))
        }
    }
}
