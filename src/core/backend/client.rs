//! `reqwest` implementation of [`EcmBackend`].

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::contract::EcmBackend;
use super::error::{BackendError, BackendResult};
use super::models::{CreateFolderRequest, Metadata, SearchRequest, StartWorkflowRequest};
use super::retry::RetryPolicy;
use crate::core::config::EcmApiConfig;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the ECM REST API.
#[derive(Debug, Clone)]
pub struct EcmApiClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl EcmApiClient {
    /// Build a client from configuration.
    ///
    /// Fails if the base URL does not parse or the credentials cannot be
    /// encoded as header values.
    pub fn new(config: &EcmApiConfig) -> BackendResult<Self> {
        let raw = config.base_url.trim();
        let base_url =
            Url::parse(raw).map_err(|e| BackendError::InvalidUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(raw.to_string()));
        }

        let http = Client::builder()
            .default_headers(default_headers(config)?)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;

        info!(
            "ECM API client configured for {} (auth: {})",
            base_url,
            auth_mode(config)
        );

        Ok(Self {
            http,
            base_url,
            retry: RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.retry_backoff_ms),
            ),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, retrying transient failures per the retry policy.
    ///
    /// `build` is invoked once per attempt.
    async fn send<F>(&self, context: &str, build: F) -> BackendResult<Response>
    where
        F: Fn(&Client) -> RequestBuilder + Send + Sync,
    {
        let mut attempt = 0;
        loop {
            let err = match build(&self.http).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!("{} -> {}", context, response.status());
                    return Ok(response);
                }
                Ok(response) => status_error(context, response).await,
                Err(e) => BackendError::Transport(e),
            };

            if attempt >= self.retry.max_retries || !err.is_retryable() {
                error!("{} ({})", err, err.details());
                return Err(err);
            }

            attempt += 1;
            let delay = self.retry.delay_for_attempt(attempt);
            warn!(
                "{} ({}), retry {}/{} in {:?}",
                context,
                err.details(),
                attempt,
                self.retry.max_retries,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, context: &str, url: Url) -> BackendResult<T> {
        let response = self.send(context, |http| http.get(url.clone())).await?;
        decode(context, response).await
    }
}

fn default_headers(config: &EcmApiConfig) -> BackendResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(key) = non_blank(config.api_key.as_deref()) {
        headers.insert(API_KEY_HEADER, sensitive(key)?);
    } else if let Some(username) = non_blank(config.username.as_deref()) {
        let password = config.password.as_deref().unwrap_or_default();
        let token = BASE64.encode(format!("{username}:{password}"));
        headers.insert(AUTHORIZATION, sensitive(&format!("Basic {token}"))?);
    }
    Ok(headers)
}

fn sensitive(value: &str) -> BackendResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|e| BackendError::Config(format!("invalid credential header: {e}")))?;
    header.set_sensitive(true);
    Ok(header)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn auth_mode(config: &EcmApiConfig) -> &'static str {
    if non_blank(config.api_key.as_deref()).is_some() {
        "api-key"
    } else if non_blank(config.username.as_deref()).is_some() {
        "basic"
    } else {
        "none"
    }
}

async fn status_error(context: &str, response: Response) -> BackendError {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
    BackendError::Status {
        status: status.as_u16(),
        message: format!("{context}: {reason}"),
        body,
    }
}

async fn decode<T: DeserializeOwned>(context: &str, response: Response) -> BackendResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::decode(format!("{context}: {e}")))
}

#[async_trait]
impl EcmBackend for EcmApiClient {
    async fn health(&self) -> BackendResult<Value> {
        let url = self.endpoint(&["health"])?;
        let context = "ECM API health check failed";
        let response = self.send(context, |http| http.get(url.clone())).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(&bytes).map_err(|e| BackendError::decode(format!("{context}: {e}")))
    }

    async fn get_document(&self, document_id: &str) -> BackendResult<Value> {
        let url = self.endpoint(&["documents", document_id])?;
        self.get_json(&format!("Failed to get document: {document_id}"), url)
            .await
    }

    async fn delete_document(&self, document_id: &str) -> BackendResult<()> {
        let url = self.endpoint(&["documents", document_id])?;
        let context = format!("Failed to delete document: {document_id}");
        self.send(&context, |http| http.delete(url.clone())).await?;
        Ok(())
    }

    async fn search_documents(&self, request: &SearchRequest) -> BackendResult<Value> {
        let url = self.endpoint(&["documents", "search"])?;
        let context = "Failed to search documents";
        let response = self
            .send(context, |http| http.post(url.clone()).json(request))
            .await?;
        decode(context, response).await
    }

    async fn create_folder(
        &self,
        name: &str,
        parent_id: Option<&str>,
        description: Option<&str>,
    ) -> BackendResult<Value> {
        let url = self.endpoint(&["folders"])?;
        let body = CreateFolderRequest {
            name,
            parent_id: parent_id.unwrap_or_default(),
            description: description.unwrap_or_default(),
        };
        let context = format!("Failed to create folder: {name}");
        let response = self
            .send(&context, |http| http.post(url.clone()).json(&body))
            .await?;
        decode(&context, response).await
    }

    async fn get_folder_contents(
        &self,
        folder_id: &str,
        include_documents: bool,
        include_subfolders: bool,
    ) -> BackendResult<Value> {
        let mut url = self.endpoint(&["folders", folder_id, "contents"])?;
        url.query_pairs_mut()
            .append_pair("includeDocuments", &include_documents.to_string())
            .append_pair("includeSubfolders", &include_subfolders.to_string());
        self.get_json(&format!("Failed to get folder contents: {folder_id}"), url)
            .await
    }

    async fn get_metadata(&self, document_id: &str) -> BackendResult<Metadata> {
        let url = self.endpoint(&["documents", document_id, "metadata"])?;
        self.get_json(&format!("Failed to get metadata: {document_id}"), url)
            .await
    }

    async fn update_metadata(
        &self,
        document_id: &str,
        metadata: &Metadata,
    ) -> BackendResult<Metadata> {
        let url = self.endpoint(&["documents", document_id, "metadata"])?;
        let context = format!("Failed to update metadata: {document_id}");
        let response = self
            .send(&context, |http| http.patch(url.clone()).json(metadata))
            .await?;
        decode(&context, response).await
    }

    async fn get_versions(&self, document_id: &str) -> BackendResult<Value> {
        let url = self.endpoint(&["documents", document_id, "versions"])?;
        self.get_json(&format!("Failed to get versions: {document_id}"), url)
            .await
    }

    async fn start_workflow(
        &self,
        document_id: &str,
        workflow_name: &str,
        parameters: Option<&Metadata>,
    ) -> BackendResult<Value> {
        let url = self.endpoint(&["workflows"])?;
        let empty = Metadata::new();
        let body = StartWorkflowRequest {
            workflow_name,
            document_id,
            parameters: parameters.unwrap_or(&empty),
        };
        let context = format!("Failed to start workflow: {workflow_name}");
        let response = self
            .send(&context, |http| http.post(url.clone()).json(&body))
            .await?;
        decode(&context, response).await
    }

    async fn get_workflow_status(&self, workflow_id: &str) -> BackendResult<Value> {
        let url = self.endpoint(&["workflows", workflow_id])?;
        self.get_json(&format!("Failed to get workflow status: {workflow_id}"), url)
            .await
    }
}
