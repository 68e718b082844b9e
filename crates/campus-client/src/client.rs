//! Resource client for the back office REST API.

use campus_model::{
    Activity, DashboardStats, Fee, FeeStatus, Inquiry, InquiryReply, InquiryStatus,
    PaymentRequest, RecordId, Resource, StatusResource, StatusUpdate, Student, StudentStatus,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientSettings;
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// One operation per (resource, verb) pair.
///
/// Responses are unwrapped from the optional envelope; failures are
/// normalised into [`ApiError`]. The client holds no record state.
#[derive(Debug, Clone)]
pub struct ResourceClient<T = HttpTransport> {
    transport: T,
}

impl ResourceClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured base URL.
    pub fn connect(settings: &ClientSettings) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(settings)?))
    }
}

impl<T: Transport> ResourceClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method.clone();
        let path = request.path();
        tracing::debug!(%method, %path, "sending request");

        let response = self.transport.execute(request).await.inspect_err(|error| {
            tracing::warn!(%method, %path, %error, "request failed");
        })?;

        if !response.is_success() {
            let error = ApiError::from_error_body(response.status, &response.body);
            tracing::warn!(%method, %path, status = response.status, %error, "request rejected");
            return Err(error);
        }
        Ok(response)
    }

    /// Send and decode the unwrapped payload.
    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.send(request).await?;
        let payload = Envelope::parse(&response.body)?.into_payload(response.status)?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Send, checking only that the call succeeded. Bodies that are not JSON
    /// are accepted; a `success: false` envelope still fails.
    async fn execute(&self, request: ApiRequest) -> Result<()> {
        let response = self.send(request).await?;
        if let Ok(envelope) = Envelope::parse(&response.body) {
            envelope.into_payload(response.status)?;
        }
        Ok(())
    }

    // =========================================================================
    // GENERIC RESOURCE OPERATIONS
    // =========================================================================

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.fetch(ApiRequest::get([R::COLLECTION])).await
    }

    pub async fn get<R: Resource>(&self, id: RecordId) -> Result<R> {
        self.fetch(ApiRequest::get([R::COLLECTION.to_string(), id.to_string()]))
            .await
    }

    pub async fn create<R: Resource>(&self, record: &R) -> Result<R> {
        self.fetch(ApiRequest::post([R::COLLECTION], encode(record)?))
            .await
    }

    pub async fn update<R: Resource>(&self, id: RecordId, record: &R) -> Result<R> {
        self.fetch(ApiRequest::put(
            [R::COLLECTION.to_string(), id.to_string()],
            encode(record)?,
        ))
        .await
    }

    pub async fn delete<R: Resource>(&self, id: RecordId) -> Result<()> {
        self.execute(ApiRequest::delete([
            R::COLLECTION.to_string(),
            id.to_string(),
        ]))
        .await
    }

    /// `PUT /{collection}/{id}/status`. The response body is not used; only
    /// success matters.
    pub async fn update_status<R: StatusResource>(
        &self,
        id: RecordId,
        status: &R::Status,
    ) -> Result<()> {
        let body = encode(&StatusUpdate {
            status: status.clone(),
        })?;
        self.execute(ApiRequest::put(
            [R::COLLECTION.to_string(), id.to_string(), "status".to_string()],
            body,
        ))
        .await
    }

    /// `GET /{collection}/{field}/{value}`.
    pub async fn filtered<R: Resource>(&self, field: &str, value: &str) -> Result<Vec<R>> {
        self.fetch(ApiRequest::get([R::COLLECTION, field, value]))
            .await
    }

    // =========================================================================
    // DASHBOARD
    // =========================================================================

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.fetch(ApiRequest::get(["dashboard", "stats"])).await
    }

    /// A `null` payload reads as an empty feed.
    pub async fn recent_activities(&self) -> Result<Vec<Activity>> {
        let activities: Option<Vec<Activity>> = self
            .fetch(ApiRequest::get(["dashboard", "recent-activities"]))
            .await?;
        Ok(activities.unwrap_or_default())
    }

    // =========================================================================
    // STUDENTS
    // =========================================================================

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.list().await
    }

    pub async fn get_student(&self, id: RecordId) -> Result<Student> {
        self.get(id).await
    }

    pub async fn create_student(&self, student: &Student) -> Result<Student> {
        self.create(student).await
    }

    pub async fn update_student(&self, id: RecordId, student: &Student) -> Result<Student> {
        self.update(id, student).await
    }

    pub async fn delete_student(&self, id: RecordId) -> Result<()> {
        self.delete::<Student>(id).await
    }

    pub async fn search_students(&self, query: &str) -> Result<Vec<Student>> {
        self.fetch(ApiRequest::get(["students", "search"]).with_query("q", query))
            .await
    }

    pub async fn students_by_status(&self, status: &StudentStatus) -> Result<Vec<Student>> {
        self.filtered::<Student>("status", status.as_str()).await
    }

    pub async fn students_by_course(&self, course: &str) -> Result<Vec<Student>> {
        self.filtered::<Student>("course", course).await
    }

    // =========================================================================
    // FEES
    // =========================================================================

    pub async fn list_fees(&self) -> Result<Vec<Fee>> {
        self.list().await
    }

    pub async fn get_fee(&self, id: RecordId) -> Result<Fee> {
        self.get(id).await
    }

    pub async fn create_fee(&self, fee: &Fee) -> Result<Fee> {
        self.create(fee).await
    }

    pub async fn update_fee(&self, id: RecordId, fee: &Fee) -> Result<Fee> {
        self.update(id, fee).await
    }

    pub async fn delete_fee(&self, id: RecordId) -> Result<()> {
        self.delete::<Fee>(id).await
    }

    pub async fn update_fee_status(&self, id: RecordId, status: &FeeStatus) -> Result<()> {
        self.update_status::<Fee>(id, status).await
    }

    pub async fn process_payment(&self, id: RecordId, payment: &PaymentRequest) -> Result<Fee> {
        self.fetch(ApiRequest::post(
            ["fees".to_string(), id.to_string(), "payment".to_string()],
            encode(payment)?,
        ))
        .await
    }

    pub async fn fees_by_student(&self, student_id: RecordId) -> Result<Vec<Fee>> {
        self.filtered::<Fee>("student", &student_id.to_string())
            .await
    }

    pub async fn fees_by_status(&self, status: &FeeStatus) -> Result<Vec<Fee>> {
        self.filtered::<Fee>("status", status.as_str()).await
    }

    pub async fn fees_by_type(&self, fee_type: &str) -> Result<Vec<Fee>> {
        self.filtered::<Fee>("type", fee_type).await
    }

    // =========================================================================
    // INQUIRIES
    // =========================================================================

    pub async fn list_inquiries(&self) -> Result<Vec<Inquiry>> {
        self.list().await
    }

    pub async fn get_inquiry(&self, id: RecordId) -> Result<Inquiry> {
        self.get(id).await
    }

    pub async fn create_inquiry(&self, inquiry: &Inquiry) -> Result<Inquiry> {
        self.create(inquiry).await
    }

    pub async fn update_inquiry(&self, id: RecordId, inquiry: &Inquiry) -> Result<Inquiry> {
        self.update(id, inquiry).await
    }

    pub async fn delete_inquiry(&self, id: RecordId) -> Result<()> {
        self.delete::<Inquiry>(id).await
    }

    pub async fn update_inquiry_status(&self, id: RecordId, status: &InquiryStatus) -> Result<()> {
        self.update_status::<Inquiry>(id, status).await
    }

    pub async fn respond_to_inquiry(&self, id: RecordId, reply: &InquiryReply) -> Result<Inquiry> {
        self.fetch(ApiRequest::post(
            ["inquiries".to_string(), id.to_string(), "respond".to_string()],
            encode(reply)?,
        ))
        .await
    }

    pub async fn inquiries_by_status(&self, status: &InquiryStatus) -> Result<Vec<Inquiry>> {
        self.filtered::<Inquiry>("status", status.as_str()).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}
