//! Admin work log overview.
//!
//! The view renders rows as returned by the backend; client-side filtering
//! is out of scope here.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::routes::Chrome;
use crate::state::AppState;

/// Work log display data, joined with its owner.
pub struct WorkLogView {
    pub employee_name: String,
    pub department: String,
    pub work_date: String,
    pub task_summary: String,
    pub hours_worked: String,
    pub comments: String,
    pub submitted: String,
}

/// Work log overview template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/worklogs.html")]
pub struct WorkLogsTemplate {
    pub chrome: Chrome,
    pub rows: Vec<WorkLogView>,
}

/// Display every work log.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(viewer): RequireAdmin,
) -> Result<WorkLogsTemplate, AppError> {
    let rows = state
        .hr()
        .all_worklogs(&viewer.credential)
        .await?
        .into_iter()
        .map(|record| WorkLogView {
            employee_name: record.employee.full_name,
            department: record.employee.department,
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
    })
}
