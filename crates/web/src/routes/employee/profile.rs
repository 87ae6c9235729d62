//! Employee profile routes: view/edit, and the one-time profile setup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::filters;
use crate::hr::{HrError, ProfileInput};
use crate::middleware::RequireEmployee;
use crate::routes::{Chrome, MessageQuery};
use crate::session::routing;
use crate::state::AppState;

/// Profile form data, shared by the edit and setup forms.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

impl From<ProfileForm> for ProfileInput {
    fn from(form: ProfileForm) -> Self {
        Self {
            full_name: form.full_name,
            phone: form.phone,
            department: form.department,
            position: form.position,
        }
    }
}

/// Profile display data.
pub struct ProfileView {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "employee/profile.html")]
pub struct ProfileTemplate {
    pub chrome: Chrome,
    pub email: String,
    pub member_since: String,
    pub profile: Option<ProfileView>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// One-time profile setup template (standalone page, outside the dashboard
/// chrome - the account has no area to navigate yet).
#[derive(Template, WebTemplate)]
#[template(path = "employee/profile_setup.html")]
pub struct ProfileSetupTemplate {
    pub username: String,
    pub error: Option<String>,
}

/// Display the profile page.
pub async fn show(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let profile = match state.hr().profile(&viewer.credential).await {
        Ok(record) => Some(ProfileView {
            full_name: record.full_name,
            phone: record.phone,
            department: record.department,
            position: record.position,
        }),
        Err(HrError::Unauthorized) => return Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch profile");
            None
        }
    };

    let error = match (&profile, query.error.as_deref()) {
        (_, Some("update")) => Some("Failed to update profile. Please try again.".to_string()),
        (None, _) => Some("Could not load your profile right now.".to_string()),
        _ => None,
    };

    Ok(ProfileTemplate {
        chrome: Chrome::from(&viewer.user),
        email: viewer.user.email.clone(),
        member_since: viewer.user.created_at.format("%Y-%m-%d").to_string(),
        profile,
        notice: query
            .success
            .as_deref()
            .map(|_| "Your profile has been updated.".to_string()),
        error,
    }
    .into_response())
}

/// Handle profile edit submission.
pub async fn update(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .update_profile(&viewer.credential, &ProfileInput::from(form))
        .await
    {
        Ok(()) => Ok(Redirect::to("/employee/profile?success=updated")),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "profile update failed");
            Ok(Redirect::to("/employee/profile?error=update"))
        }
    }
}

/// Display the one-time profile setup form.
pub async fn setup_page(
    RequireEmployee(viewer): RequireEmployee,
    Query(query): Query<MessageQuery>,
) -> ProfileSetupTemplate {
    ProfileSetupTemplate {
        username: viewer.user.username,
        error: query
            .error
            .as_deref()
            .map(|_| "Failed to set up your profile. Please try again.".to_string()),
    }
}

/// Handle profile setup submission.
///
/// On success the employee lands on their profile home; the next resolution
/// returns the account with setup marked complete.
pub async fn complete_setup(
    State(state): State<AppState>,
    RequireEmployee(viewer): RequireEmployee,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect, AppError> {
    match state
        .hr()
        .complete_profile_setup(&viewer.credential, &ProfileInput::from(form))
        .await
    {
        Ok(()) => Ok(Redirect::to(routing::EMPLOYEE_HOME)),
        Err(HrError::Unauthorized) => Err(AppError::from(HrError::Unauthorized)),
        Err(err) => {
            tracing::warn!(error = %err, "profile setup failed");
            Ok(Redirect::to("/employee/profile-setup?error=setup"))
        }
    }
}
