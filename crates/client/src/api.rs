//! # REST Collaborators
//!
//! The dashboard backend owns every business rule. This module only knows how
//! to read the working slots, replace the active slot set, and push new files.
//!
//! | call | request |
//! |------|---------|
//! | [`SlotApi::fetch_working_slots`] | `GET /working-slots` |
//! | [`SlotApi::set_active_slots`] | `PUT /working-slots/active` |
//! | [`FileApi::upload_files`] | `POST /files/upload` (multipart, field `files`) |
//!
//! Responses are wrapped in a `{ "data": ... }` envelope.

use async_trait::async_trait;
use eyre::{Result, WrapErr, eyre};
use reqwest::{RequestBuilder, Response, multipart};
use serde::{Deserialize, de::DeserializeOwned};
use slotdesk_core::models::slot::{ServerSlot, SetActiveSlotsRequest};
use tracing::{debug, info};

use crate::config::ClientConfig;

/// Working-slot endpoints.
#[async_trait]
pub trait SlotApi: Send + Sync {
    async fn fetch_working_slots(&self) -> Result<Vec<ServerSlot>>;

    /// Replaces the server's active set with exactly `ids`.
    async fn set_active_slots(&self, ids: &[String]) -> Result<()>;
}

/// One file in an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// File upload endpoint.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// Returns one URL per part, in the order the parts were sent.
    async fn upload_files(&self, parts: Vec<FilePart>) -> Result<Vec<String>>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// `reqwest` implementation of the collaborator traits.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        Err(eyre!("Failed to {}: {} {}", action, status, error_text))
    }

    async fn read_data<T: DeserializeOwned>(response: Response, action: &str) -> Result<T> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .wrap_err_with(|| format!("Malformed response while trying to {action}"))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl SlotApi for ApiClient {
    async fn fetch_working_slots(&self) -> Result<Vec<ServerSlot>> {
        let response = self
            .authorize(self.http.get(self.url("/working-slots")))
            .send()
            .await?;
        let response = Self::ensure_success(response, "fetch working slots").await?;
        let slots: Vec<ServerSlot> = Self::read_data(response, "fetch working slots").await?;

        debug!(count = slots.len(), "Fetched working slots");
        Ok(slots)
    }

    async fn set_active_slots(&self, ids: &[String]) -> Result<()> {
        let request = SetActiveSlotsRequest { ids: ids.to_vec() };
        let response = self
            .authorize(self.http.put(self.url("/working-slots/active")))
            .json(&request)
            .send()
            .await?;
        Self::ensure_success(response, "set active slots").await?;

        info!(count = ids.len(), "Replaced active working slots");
        Ok(())
    }
}

#[async_trait]
impl FileApi for ApiClient {
    async fn upload_files(&self, parts: Vec<FilePart>) -> Result<Vec<String>> {
        let count = parts.len();
        let mut form = multipart::Form::new();
        for part in parts {
            let file = multipart::Part::bytes(part.bytes)
                .file_name(part.name.clone())
                .mime_str(&part.mime_type)
                .wrap_err_with(|| format!("Invalid MIME type for {}", part.name))?;
            form = form.part("files", file);
        }

        let response = self
            .authorize(self.http.post(self.url("/files/upload")))
            .multipart(form)
            .send()
            .await?;
        let response = Self::ensure_success(response, "upload files").await?;
        let urls: Vec<String> = Self::read_data(response, "upload files").await?;

        info!(sent = count, received = urls.len(), "Uploaded files");
        Ok(urls)
    }
}
