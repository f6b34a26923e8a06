//! Typed HTTP client for the roster API.

use reqwest::{Method, StatusCode};
use roster_core::constants::{
    ASSIGNMENTS_ROUTE_PREFIX, AVAILABILITY_ROUTE_PREFIX, API_ROUTE_PREFIX, NEEDS_ROUTE_PREFIX,
    SERVICE_USERS_ROUTE_PREFIX, STAFF_ROUTE_PREFIX,
};
use roster_core::types::RecordId;
use roster_db::model::assignment::{AssignmentWithNames, NewAssignment};
use roster_db::model::availability::{NewStaffAvailability, StaffAvailabilityWithStaff};
use roster_db::model::need::{NewServiceUserNeed, ServiceUserNeed, ServiceUserNeedWithUser};
use roster_db::model::service_user::{NewServiceUser, ServiceUser};
use roster_db::model::staff::{NewStaff, Staff};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Acknowledgement returned by every write: `{"message": "...", "id": N}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub message: String,
    pub id: RecordId,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct RosterClient {
    base: String,
    http: reqwest::Client,
}

impl RosterClient {
    /// ## Summary
    /// Builds a client for the server at `base`, e.g. `http://127.0.0.1:8000`.
    ///
    /// ## Errors
    /// Returns `InvalidBaseUrl` if `base` is not an http(s) URL, or an HTTP
    /// error if the underlying client cannot be built.
    pub fn new(base: &str) -> ClientResult<Self> {
        let base = base.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("roster-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base: base.to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    #[tracing::instrument(skip(self, body), err)]
    async fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_err) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
        };
        tracing::debug!(status = %status, message, "Server rejected request");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.call::<(), T>(Method::GET, path, None).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Ack> {
        self.call(method, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<Ack> {
        self.call::<(), Ack>(Method::DELETE, path, None).await
    }

    /// ## Summary
    /// Returns whether the server answers its health check.
    ///
    /// ## Errors
    /// Returns an HTTP error if the server cannot be reached.
    pub async fn health(&self) -> ClientResult<bool> {
        let response = self
            .http
            .get(self.url(&format!("{API_ROUTE_PREFIX}/healthcheck")))
            .send()
            .await?;
        Ok(response.status() == StatusCode::OK)
    }

    /// ## Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_staff(&self) -> ClientResult<Vec<Staff>> {
        self.get(STAFF_ROUTE_PREFIX).await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no staff member has the ID.
    pub async fn get_staff(&self, id: RecordId) -> ClientResult<Staff> {
        self.get(&format!("{STAFF_ROUTE_PREFIX}/{id}")).await
    }

    /// ## Errors
    /// Returns `Api` with status 400 if the server rejects a field.
    pub async fn create_staff(&self, staff: &NewStaff) -> ClientResult<Ack> {
        self.send(Method::POST, STAFF_ROUTE_PREFIX, staff).await
    }

    /// ## Errors
    /// Returns `Api` with status 400 or 404 if the server rejects the update.
    pub async fn update_staff(&self, id: RecordId, staff: &NewStaff) -> ClientResult<Ack> {
        self.send(Method::PUT, &format!("{STAFF_ROUTE_PREFIX}/{id}"), staff)
            .await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no staff member has the ID.
    pub async fn delete_staff(&self, id: RecordId) -> ClientResult<Ack> {
        self.delete(&format!("{STAFF_ROUTE_PREFIX}/{id}")).await
    }

    /// ## Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_service_users(&self) -> ClientResult<Vec<ServiceUser>> {
        self.get(SERVICE_USERS_ROUTE_PREFIX).await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no service user has the ID.
    pub async fn get_service_user(&self, id: RecordId) -> ClientResult<ServiceUser> {
        self.get(&format!("{SERVICE_USERS_ROUTE_PREFIX}/{id}")).await
    }

    /// ## Errors
    /// Returns `Api` with status 400 if the server rejects a field.
    pub async fn create_service_user(&self, user: &NewServiceUser) -> ClientResult<Ack> {
        self.send(Method::POST, SERVICE_USERS_ROUTE_PREFIX, user)
            .await
    }

    /// ## Errors
    /// Returns `Api` with status 400 or 404 if the server rejects the update.
    pub async fn update_service_user(
        &self,
        id: RecordId,
        user: &NewServiceUser,
    ) -> ClientResult<Ack> {
        self.send(Method::PUT, &format!("{SERVICE_USERS_ROUTE_PREFIX}/{id}"), user)
            .await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no service user has the ID.
    pub async fn delete_service_user(&self, id: RecordId) -> ClientResult<Ack> {
        self.delete(&format!("{SERVICE_USERS_ROUTE_PREFIX}/{id}"))
            .await
    }

    /// ## Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_availability(&self) -> ClientResult<Vec<StaffAvailabilityWithStaff>> {
        self.get(AVAILABILITY_ROUTE_PREFIX).await
    }

    /// ## Summary
    /// Stores availability for a staff member, replacing what they had.
    ///
    /// ## Errors
    /// Returns `Api` with status 400 or 404 if the server rejects it.
    pub async fn set_availability(&self, availability: &NewStaffAvailability) -> ClientResult<Ack> {
        self.send(Method::POST, AVAILABILITY_ROUTE_PREFIX, availability)
            .await
    }

    /// ## Errors
    /// Returns `Api` with status 400, 404 or 409 if the server rejects it.
    pub async fn update_availability(
        &self,
        id: RecordId,
        availability: &NewStaffAvailability,
    ) -> ClientResult<Ack> {
        self.send(
            Method::PUT,
            &format!("{AVAILABILITY_ROUTE_PREFIX}/{id}"),
            availability,
        )
        .await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no availability row has the ID.
    pub async fn delete_availability(&self, id: RecordId) -> ClientResult<Ack> {
        self.delete(&format!("{AVAILABILITY_ROUTE_PREFIX}/{id}"))
            .await
    }

    /// ## Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_assignments(&self) -> ClientResult<Vec<AssignmentWithNames>> {
        self.get(ASSIGNMENTS_ROUTE_PREFIX).await
    }

    /// ## Errors
    /// Returns `Api` with status 409 if the service user already has an
    /// assignment on that date, 404 for a missing reference and 400 when the
    /// start and end times are equal.
    pub async fn create_assignment(&self, assignment: &NewAssignment) -> ClientResult<Ack> {
        self.send(Method::POST, ASSIGNMENTS_ROUTE_PREFIX, assignment)
            .await
    }

    /// ## Errors
    /// Same as [`Self::create_assignment`], plus 404 for an unknown ID.
    pub async fn update_assignment(
        &self,
        id: RecordId,
        assignment: &NewAssignment,
    ) -> ClientResult<Ack> {
        self.send(
            Method::PUT,
            &format!("{ASSIGNMENTS_ROUTE_PREFIX}/{id}"),
            assignment,
        )
        .await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no assignment has the ID.
    pub async fn delete_assignment(&self, id: RecordId) -> ClientResult<Ack> {
        self.delete(&format!("{ASSIGNMENTS_ROUTE_PREFIX}/{id}"))
            .await
    }

    /// ## Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn list_needs(&self) -> ClientResult<Vec<ServiceUserNeedWithUser>> {
        self.get(NEEDS_ROUTE_PREFIX).await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if the service user does not exist.
    pub async fn list_needs_for(&self, service_user_id: RecordId) -> ClientResult<Vec<ServiceUserNeed>> {
        self.get(&format!(
            "{NEEDS_ROUTE_PREFIX}?service_user_id={service_user_id}"
        ))
        .await
    }

    /// ## Errors
    /// Returns `Api` with status 400 or 404 if the server rejects it.
    pub async fn create_need(&self, need: &NewServiceUserNeed) -> ClientResult<Ack> {
        self.send(Method::POST, NEEDS_ROUTE_PREFIX, need).await
    }

    /// ## Errors
    /// Returns `Api` with status 400 or 404 if the server rejects it.
    pub async fn update_need(&self, id: RecordId, need: &NewServiceUserNeed) -> ClientResult<Ack> {
        self.send(Method::PUT, &format!("{NEEDS_ROUTE_PREFIX}/{id}"), need)
            .await
    }

    /// ## Errors
    /// Returns `Api` with status 404 if no need has the ID.
    pub async fn delete_need(&self, id: RecordId) -> ClientResult<Ack> {
        self.delete(&format!("{NEEDS_ROUTE_PREFIX}/{id}")).await
    }
}
