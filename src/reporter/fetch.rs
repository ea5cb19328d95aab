use serde::Deserialize;

use crate::models::Appointment;

use super::ReportError;

/// Read-only HTTP client for the booking API.
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

/// Response body from `GET /citas`
#[derive(Deserialize)]
struct AppointmentsResponse {
    citas: Vec<Appointment>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ReportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ReportError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every appointment the API holds.
    pub fn fetch_appointments(&self) -> Result<Vec<Appointment>, ReportError> {
        let url = format!("{}/citas", self.base_url);

        // Any transport failure means the API could not be reached.
        let response = self.client.get(&url).send().map_err(|e| {
            let reason = if e.is_timeout() {
                format!("no response within {}s", self.timeout_secs)
            } else if e.is_connect() {
                "connection refused or unreachable".to_string()
            } else {
                e.to_string()
            };
            ReportError::Connection {
                url: self.base_url.clone(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ReportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AppointmentsResponse = response
            .json()
            .map_err(|e| ReportError::Decode(e.to_string()))?;

        tracing::debug!(count = parsed.citas.len(), "Fetched appointments");
        Ok(parsed.citas)
    }
}
