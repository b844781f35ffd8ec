//! Trait abstraction for the backend client to enable mocking in tests

use crate::state::{FieldDef, SavedForm};
use async_trait::async_trait;

use super::client::{BackendClient, BackendError};

/// Trait for backend client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClientTrait: Send + Sync {
    /// Check if the backend is reachable
    async fn check_connection(&self) -> bool;

    /// Fetch all saved forms
    async fn list_forms(&self) -> Result<Vec<SavedForm>, BackendError>;

    /// Persist a new form built from the given fields
    async fn create_form(&self, fields: &[FieldDef]) -> Result<(), BackendError>;

    /// Delete a saved form by id
    async fn delete_form(&self, form_id: &str) -> Result<(), BackendError>;
}

#[async_trait]
impl BackendClientTrait for BackendClient {
    async fn check_connection(&self) -> bool {
        BackendClient::check_connection(self).await
    }

    async fn list_forms(&self) -> Result<Vec<SavedForm>, BackendError> {
        BackendClient::list_forms(self).await
    }

    async fn create_form(&self, fields: &[FieldDef]) -> Result<(), BackendError> {
        BackendClient::create_form(self, fields).await
    }

    async fn delete_form(&self, form_id: &str) -> Result<(), BackendError> {
        BackendClient::delete_form(self, form_id).await
    }
}
