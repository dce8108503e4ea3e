//! Todoist backend implementation.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use super::{BackendError, CompletedTasksApi};
use crate::todoist::{CompletedPage, CompletedQuery, RequestHeaders};
use crate::utils::datetime::DateRange;

/// Todoist backend implementation.
pub struct TodoistBackend {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl TodoistBackend {
    /// Create a backend that posts to `endpoint` with the provided API token.
    pub fn with_endpoint(api_token: &str, endpoint: &str) -> Result<Self, BackendError> {
        let headers = Self::header_map(&RequestHeaders::new(api_token))?;
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // Helper: RequestHeaders → reqwest HeaderMap
    fn header_map(headers: &RequestHeaders) -> Result<HeaderMap, BackendError> {
        let mut map = HeaderMap::new();
        map.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&headers.content_type).map_err(|e| BackendError::InvalidData(e.to_string()))?,
        );
        let mut auth = HeaderValue::from_str(&headers.authorization)
            .map_err(|_| BackendError::Auth("API token contains characters not allowed in a header".to_string()))?;
        auth.set_sensitive(true);
        map.insert(AUTHORIZATION, auth);
        Ok(map)
    }

    // Helper: classify a non-success status
    fn status_error(status: StatusCode) -> BackendError {
        if status == StatusCode::FORBIDDEN {
            BackendError::Auth(status.to_string())
        } else {
            BackendError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            }
        }
    }
}

impl CompletedTasksApi for TodoistBackend {
    fn backend_type(&self) -> &str {
        "todoist"
    }

    fn fetch_completed_page(&self, range: &DateRange, offset: usize) -> Result<CompletedPage, BackendError> {
        let query = CompletedQuery::new(range, offset);
        log::debug!("POST {} offset={}", self.endpoint, offset);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&query)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        let page: CompletedPage = response
            .json()
            .map_err(|e| BackendError::InvalidData(e.to_string()))?;
        log::debug!("Fetched {} completed items at offset {}", page.items.len(), offset);
        Ok(page)
    }
}
