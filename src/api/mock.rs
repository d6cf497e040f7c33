//! Mock Backend
//!
//! Serves the documents endpoint from the storage adapter so development
//! builds run without a server.

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::ApiResult;
use crate::models::DocumentCard;
use crate::storage::{DocumentStorage, KeyValueStore};

pub struct MockBackend<S: KeyValueStore> {
    storage: DocumentStorage<S>,
    path: String,
}

impl<S: KeyValueStore> MockBackend<S> {
    pub fn new(storage: DocumentStorage<S>, path: impl Into<String>) -> Self {
        Self { storage, path: path.into() }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &DocumentStorage<S> {
        &self.storage
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        if request.path != self.path {
            return HttpResponse::new(404, "Not Found", "");
        }
        match request.method {
            Method::Get => self.handle_get(),
            Method::Post => self.handle_post(request.body.as_deref().unwrap_or_default()),
        }
    }

    fn handle_get(&self) -> HttpResponse {
        match serde_json::to_string(&self.storage.read_all()) {
            Ok(body) => HttpResponse::new(200, "OK", body),
            Err(e) => internal_error(&e.to_string()),
        }
    }

    fn handle_post(&self, body: &str) -> HttpResponse {
        let cards: Vec<DocumentCard> = match serde_json::from_str(body) {
            Ok(cards) => cards,
            Err(e) => return internal_error(&format!("unreadable body: {}", e)),
        };
        match self.storage.write_all(&cards) {
            Ok(()) => {
                log::debug!("[MOCK] Stored {} documents", cards.len());
                HttpResponse::new(201, "Created", "Data saved successfully")
            }
            Err(e) => internal_error(&e.to_string()),
        }
    }
}

fn internal_error(reason: &str) -> HttpResponse {
    log::warn!("[MOCK] Handler failed: {}", reason);
    HttpResponse::new(500, "Internal Server Error", reason)
}

#[async_trait(?Send)]
impl<S: KeyValueStore> Transport for MockBackend<S> {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        log::debug!("[MOCK] {} {}", request.method.as_str(), request.path);
        Ok(self.handle(&request))
    }
}
