//! The narrow call-and-await contract tools depend on.

use async_trait::async_trait;
use serde_json::Value;

use super::error::BackendResult;
use super::models::{Metadata, SearchRequest};

/// Operations the gateway needs from an ECM system.
///
/// Implementations perform their own timeouts and retries. Any `Err` means
/// the call failed, whatever the underlying cause.
///
/// Document, search, folder, version and workflow payloads are returned as
/// the backend sent them; tools forward them without reshaping.
#[async_trait]
pub trait EcmBackend: Send + Sync {
    /// Probe backend availability.
    async fn health(&self) -> BackendResult<Value>;

    async fn get_document(&self, document_id: &str) -> BackendResult<Value>;

    async fn delete_document(&self, document_id: &str) -> BackendResult<()>;

    async fn search_documents(&self, request: &SearchRequest) -> BackendResult<Value>;

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        description: Option<&str>,
    ) -> BackendResult<Value>;

    async fn get_folder_contents(
        &self,
        folder_id: &str,
        include_documents: bool,
        include_subfolders: bool,
    ) -> BackendResult<Value>;

    async fn get_metadata(&self, document_id: &str) -> BackendResult<Metadata>;

    async fn update_metadata(&self, document_id: &str, metadata: &Metadata)
    -> BackendResult<Metadata>;

    async fn get_versions(&self, document_id: &str) -> BackendResult<Value>;

    async fn start_workflow(
        &self,
        document_id: &str,
        workflow_name: &str,
        parameters: Option<&Metadata>,
    ) -> BackendResult<Value>;

    async fn get_workflow_status(&self, workflow_id: &str) -> BackendResult<Value>;
}
