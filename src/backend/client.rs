//! HTTP client for the form backend
//!
//! Thin wrappers over the backend's REST endpoints: list, create, and
//! delete forms under `/api/forms`.

use crate::state::{FieldDef, SavedForm};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Default backend address
const DEFAULT_ADDRESS: &str = "http://localhost:1000";

/// Environment variable overriding the backend address
const ADDRESS_ENV_VAR: &str = "FORMBUILDER_URL";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from talking to the form backend.
///
/// Both kinds are handled the same way by the app: logged, surfaced in the
/// error dialog, and otherwise swallowed with state left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never completed (connection refused, DNS, timeout)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("server returned {status}")]
    Server { status: StatusCode },
}

/// POST body for form creation
#[derive(Debug, Serialize)]
pub struct CreateFormRequest<'a> {
    pub fields: &'a [FieldDef],
}

/// Client for communicating with the form backend
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// The address is taken from `FORMBUILDER_URL`, then the config file,
    /// then the default.
    pub fn new(configured_url: Option<&str>) -> anyhow::Result<Self> {
        let base_url = std::env::var(ADDRESS_ENV_VAR)
            .ok()
            .or_else(|| configured_url.map(String::from))
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit address
    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn forms_url(&self) -> String {
        format!("{}/api/forms", self.base_url)
    }

    /// Check if the backend is reachable (lightweight HEAD probe)
    pub async fn check_connection(&self) -> bool {
        self.http.head(self.forms_url()).send().await.is_ok()
    }

    /// Fetch all saved forms
    pub async fn list_forms(&self) -> Result<Vec<SavedForm>, BackendError> {
        let response = self.http.get(self.forms_url()).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::Server {
                status: response.status(),
            });
        }
        let forms = response.json::<Vec<SavedForm>>().await?;
        Ok(forms)
    }

    /// Persist a new form. The response body is unused; only the status
    /// decides success.
    pub async fn create_form(&self, fields: &[FieldDef]) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.forms_url())
            .json(&CreateFormRequest { fields })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Server {
                status: response.status(),
            });
        }
        Ok(())
    }

    /// Delete a saved form by its server-assigned id
    pub async fn delete_form(&self, form_id: &str) -> Result<(), BackendError> {
        let response = self
            .http
            .delete(format!("{}/{}", self.forms_url(), form_id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(BackendError::Server {
                status: response.status(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_request_body_shape() {
        let fields = vec![
            FieldDef::new("Name", FieldType::Text),
            FieldDef::new("DOB", FieldType::Date),
        ];
        let body = serde_json::to_value(CreateFormRequest { fields: &fields }).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "fields": [
                    {"name": "Name", "type": "text"},
                    {"name": "DOB", "type": "date"},
                ]
            })
        );
    }

    #[test]
    fn test_create_request_body_with_empty_fields() {
        let body = serde_json::to_value(CreateFormRequest { fields: &[] }).unwrap();
        assert_eq!(body, serde_json::json!({"fields": []}));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = BackendClient::with_base_url("http://localhost:1000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1000");
        assert_eq!(client.forms_url(), "http://localhost:1000/api/forms");
    }

    #[test]
    fn test_server_error_display_includes_status() {
        let err = BackendError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "server returned 500 Internal Server Error");
    }
}
