//! Documents Client
//!
//! Single-attempt read and write of the whole card list.

use std::rc::Rc;

use super::{HttpRequest, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::DocumentCard;

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    endpoint: String,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_documents(&self) -> ApiResult<Vec<DocumentCard>> {
        let result = self.try_fetch_documents().await;
        if let Err(e) = &result {
            log::error!("[API] Failed to fetch documents: {}", e);
        }
        result
    }

    async fn try_fetch_documents(&self) -> ApiResult<Vec<DocumentCard>> {
        let response = self.transport.send(HttpRequest::get(self.endpoint.as_str())).await?;
        if !response.ok() {
            return Err(ApiError::Status {
                context: "Error fetching documents",
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    pub async fn save_documents(&self, cards: &[DocumentCard]) -> ApiResult<()> {
        let result = self.try_save_documents(cards).await;
        if let Err(e) = &result {
            log::error!("[API] Error saving documents: {}", e);
        }
        result
    }

    async fn try_save_documents(&self, cards: &[DocumentCard]) -> ApiResult<()> {
        let body = serde_json::to_string(cards)?;
        let response = self
            .transport
            .send(HttpRequest::post_json(self.endpoint.as_str(), body))
            .await?;
        if !response.ok() {
            return Err(ApiError::Status {
                context: "Failed to save documents",
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(())
    }
}
