//! In-memory [`EcmBackend`] that records every call.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

use super::contract::EcmBackend;
use super::error::{BackendError, BackendResult};
use super::models::{Metadata, SearchRequest};

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Health,
    GetDocument(String),
    DeleteDocument(String),
    SearchDocuments(SearchRequest),
    CreateFolder {
        name: String,
        parent_id: Option<String>,
        description: Option<String>,
    },
    GetFolderContents {
        folder_id: String,
        include_documents: bool,
        include_subfolders: bool,
    },
    GetMetadata(String),
    UpdateMetadata {
        document_id: String,
        metadata: Metadata,
    },
    GetVersions(String),
    StartWorkflow {
        document_id: String,
        workflow_name: String,
        parameters: Option<Metadata>,
    },
    GetWorkflowStatus(String),
}

impl BackendCall {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::GetDocument(_) => "get_document",
            Self::DeleteDocument(_) => "delete_document",
            Self::SearchDocuments(_) => "search_documents",
            Self::CreateFolder { .. } => "create_folder",
            Self::GetFolderContents { .. } => "get_folder_contents",
            Self::GetMetadata(_) => "get_metadata",
            Self::UpdateMetadata { .. } => "update_metadata",
            Self::GetVersions(_) => "get_versions",
            Self::StartWorkflow { .. } => "start_workflow",
            Self::GetWorkflowStatus(_) => "get_workflow_status",
        }
    }
}

/// Test double: canned responses per operation, or one failure for all.
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    responses: HashMap<&'static str, Value>,
    failure: Option<(u16, String)>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a status error.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::default()
        }
    }

    /// Answer `operation` with `response`, decoded into the operation's return type.
    /// Operations without a canned response answer an empty payload.
    pub fn with_response(mut self, operation: &'static str, response: Value) -> Self {
        self.responses.insert(operation, response);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        call: BackendCall,
        empty: impl FnOnce() -> T,
    ) -> BackendResult<T> {
        let operation = call.operation();
        self.calls.lock().unwrap().push(call);
        if let Some((status, message)) = &self.failure {
            return Err(BackendError::status(*status, message.clone()));
        }
        match self.responses.get(operation) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| BackendError::decode(e.to_string())),
            None => Ok(empty()),
        }
    }
}

#[async_trait]
impl EcmBackend for RecordingBackend {
    async fn health(&self) -> BackendResult<Value> {
        self.respond(BackendCall::Health, || json!({"status": "UP"}))
    }

    async fn get_document(&self, document_id: &str) -> BackendResult<Value> {
        self.respond(BackendCall::GetDocument(document_id.to_string()), object)
    }

    async fn delete_document(&self, document_id: &str) -> BackendResult<()> {
        self.respond(BackendCall::DeleteDocument(document_id.to_string()), || Value::Null)
            .map(|_| ())
    }

    async fn search_documents(&self, request: &SearchRequest) -> BackendResult<Value> {
        self.respond(BackendCall::SearchDocuments(request.clone()), object)
    }

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        description: Option<&str>,
    ) -> BackendResult<Value> {
        self.respond(
            BackendCall::CreateFolder {
                name: name.to_string(),
                parent_id: parent_id.map(str::to_string),
                description: description.map(str::to_string),
            },
            object,
        )
    }

    async fn get_folder_contents(
        &self,
        folder_id: &str,
        include_documents: bool,
        include_subfolders: bool,
    ) -> BackendResult<Value> {
        self.respond(
            BackendCall::GetFolderContents {
                folder_id: folder_id.to_string(),
                include_documents,
                include_subfolders,
            },
            object,
        )
    }

    async fn get_metadata(&self, document_id: &str) -> BackendResult<Metadata> {
        self.respond(BackendCall::GetMetadata(document_id.to_string()), Metadata::new)
    }

    async fn update_metadata(
        &self,
        document_id: &str,
        metadata: &Metadata,
    ) -> BackendResult<Metadata> {
        self.respond(
            BackendCall::UpdateMetadata {
                document_id: document_id.to_string(),
                metadata: metadata.clone(),
            },
            Metadata::new,
        )
    }

    async fn get_versions(&self, document_id: &str) -> BackendResult<Value> {
        self.respond(BackendCall::GetVersions(document_id.to_string()), || json!([]))
    }

    async fn start_workflow(
        &self,
        document_id: &str,
        workflow_name: &str,
        parameters: Option<&Metadata>,
    ) -> BackendResult<Value> {
        self.respond(
            BackendCall::StartWorkflow {
                document_id: document_id.to_string(),
                workflow_name: workflow_name.to_string(),
                parameters: parameters.cloned(),
            },
            object,
        )
    }

    async fn get_workflow_status(&self, workflow_id: &str) -> BackendResult<Value> {
        self.respond(BackendCall::GetWorkflowStatus(workflow_id.to_string()), object)
    }
}

fn object() -> Value {
    Value::Object(Default::default())
}
