//! HR API client.
//!
//! The HR backend is the system of record for accounts, employee records,
//! leave requests, and work logs. This client wraps its REST+JSON surface.
//! Every call except [`HrClient::login`] presents a bearer [`Credential`];
//! validity is decided by the backend per request, never cached here.
//!
//! # Example
//!
//! ```rust,ignore
//! use crewdesk_web::hr::HrClient;
//!
//! let hr = HrClient::new(&config.hr_api);
//!
//! // Exchange credentials for a token + user, atomically
//! let grant = hr.login("alice", "s3cret").await?;
//!
//! // Use the token for account-scoped calls
//! let me = hr.current_user(&credential).await?;
//! ```

mod error;
mod types;

pub use error::HrError;
pub use types::*;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crewdesk_core::{Credential, EmployeeId, LeaveRequestId};

use crate::config::HrApiConfig;

/// Client for the HR API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct HrClient {
    inner: Arc<HrClientInner>,
}

struct HrClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl HrClient {
    /// Create a new HR API client.
    #[must_use]
    pub fn new(config: &HrApiConfig) -> Self {
        Self {
            inner: Arc::new(HrClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// The configured backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Send a request and decode a JSON body on success.
    async fn execute<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, HrError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HrError::from_status(status));
        }
        Ok(response.json().await?)
    }

    /// Send a request where only the status matters.
    async fn execute_empty(request: reqwest::RequestBuilder) -> Result<(), HrError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HrError::from_status(status));
        }
        Ok(())
    }

    fn get(&self, credential: &Credential, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .client
            .get(self.url(path))
            .bearer_auth(credential.expose())
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        credential: &Credential,
        path: &str,
        body: &B,
    ) -> reqwest::RequestBuilder {
        self.inner
            .client
            .post(self.url(path))
            .bearer_auth(credential.expose())
            .json(body)
    }

    fn put_json<B: Serialize + ?Sized>(
        &self,
        credential: &Credential,
        path: &str,
        body: &B,
    ) -> reqwest::RequestBuilder {
        self.inner
            .client
            .put(self.url(path))
            .bearer_auth(credential.expose())
            .json(body)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authentication
    // ─────────────────────────────────────────────────────────────────────────

    /// Exchange a username and password for a token and its user record.
    ///
    /// The backend returns both in one payload so the caller can install
    /// them together.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the credentials or cannot be
    /// reached.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, HrError> {
        let request = self
            .inner
            .client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { username, password });
        Self::execute(request).await
    }

    /// Look up the user a stored token belongs to.
    ///
    /// # Errors
    ///
    /// Returns `HrError::Unauthorized` when the token is no longer accepted.
    pub async fn current_user(&self, credential: &Credential) -> Result<UserRecord, HrError> {
        Self::execute(self.get(credential, "/user/me")).await
    }

    /// Register a new employee account (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn register_employee(
        &self,
        credential: &Credential,
        input: &RegisterEmployeeInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.post_json(credential, "/api/auth/register-employee", input)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Employee self-service
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn profile(&self, credential: &Credential) -> Result<ProfileRecord, HrError> {
        Self::execute(self.get(credential, "/api/profile/me")).await
    }

    /// Update the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_profile(
        &self,
        credential: &Credential,
        input: &ProfileInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.put_json(credential, "/api/profile/me", input)).await
    }

    /// Complete the one-time profile setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn complete_profile_setup(
        &self,
        credential: &Credential,
        input: &ProfileInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.post_json(credential, "/api/profile/setup", input)).await
    }

    /// List the caller's leave requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn my_leaves(
        &self,
        credential: &Credential,
    ) -> Result<Vec<LeaveRequestRecord>, HrError> {
        Self::execute(self.get(credential, "/api/employee/leaves")).await
    }

    /// Submit a new leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn submit_leave(
        &self,
        credential: &Credential,
        input: &LeaveInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.post_json(credential, "/api/employee/leaves", input)).await
    }

    /// Cancel one of the caller's pending leave requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn cancel_leave(
        &self,
        credential: &Credential,
        id: LeaveRequestId,
    ) -> Result<(), HrError> {
        let request = self
            .inner
            .client
            .delete(self.url(&format!("/api/employee/leaves/{id}")))
            .bearer_auth(credential.expose());
        Self::execute_empty(request).await
    }

    /// List the caller's work logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn my_worklogs(
        &self,
        credential: &Credential,
    ) -> Result<Vec<WorkLogRecord>, HrError> {
        Self::execute(self.get(credential, "/api/employee/worklogs")).await
    }

    /// Submit a new work log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn submit_worklog(
        &self,
        credential: &Credential,
        input: &WorkLogInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.post_json(credential, "/api/employee/worklogs", input)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────────────────────

    /// List all employee records.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn employees(
        &self,
        credential: &Credential,
    ) -> Result<Vec<EmployeeRecord>, HrError> {
        Self::execute(self.get(credential, "/api/admin/employees")).await
    }

    /// Create an employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn create_employee(
        &self,
        credential: &Credential,
        input: &EmployeeInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.post_json(credential, "/api/admin/employees", input)).await
    }

    /// Update an employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn update_employee(
        &self,
        credential: &Credential,
        id: EmployeeId,
        input: &EmployeeInput,
    ) -> Result<(), HrError> {
        Self::execute_empty(self.put_json(credential, &format!("/api/admin/employees/{id}"), input))
            .await
    }

    /// Delete an employee record.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn delete_employee(
        &self,
        credential: &Credential,
        id: EmployeeId,
    ) -> Result<(), HrError> {
        let request = self
            .inner
            .client
            .delete(self.url(&format!("/api/admin/employees/{id}")))
            .bearer_auth(credential.expose());
        Self::execute_empty(request).await
    }

    /// List every leave request with its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn all_leaves(
        &self,
        credential: &Credential,
    ) -> Result<Vec<AdminLeaveRecord>, HrError> {
        Self::execute(self.get(credential, "/api/admin/leaves")).await
    }

    /// Approve a pending leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn approve_leave(
        &self,
        credential: &Credential,
        id: LeaveRequestId,
    ) -> Result<(), HrError> {
        let request = self
            .inner
            .client
            .put(self.url(&format!("/api/admin/leaves/{id}/approve")))
            .bearer_auth(credential.expose());
        Self::execute_empty(request).await
    }

    /// Reject a pending leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn reject_leave(
        &self,
        credential: &Credential,
        id: LeaveRequestId,
    ) -> Result<(), HrError> {
        let request = self
            .inner
            .client
            .put(self.url(&format!("/api/admin/leaves/{id}/reject")))
            .bearer_auth(credential.expose());
        Self::execute_empty(request).await
    }

    /// List every work log with its owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn all_worklogs(
        &self,
        credential: &Credential,
    ) -> Result<Vec<AdminWorkLogRecord>, HrError> {
        Self::execute(self.get(credential, "/api/admin/worklogs")).await
    }
}
