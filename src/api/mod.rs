//! Documents API
//!
//! HTTP-shaped transport seam, the client on top of it, and the two backends:
//! a local-storage mock for development builds and the browser `fetch`.

mod client;
mod fetch;
mod mock;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::constants::seed_documents;
use crate::error::ApiResult;
use crate::storage::{BrowserStorage, DocumentStorage, KeyValueStore, MemoryStorage};

pub use client::ApiClient;
pub use fetch::FetchTransport;
pub use mock::MockBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    /// JSON body
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post_json(path: impl Into<String>, body: String) -> Self {
        Self { method: Method::Post, path: path.into(), body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self { status, status_text: status_text.into(), body: body.into() }
    }

    /// 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can answer an HTTP-shaped request.
///
/// Errors are transport failures only; non-2xx statuses are responses.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Build the client for this session: the local-storage mock when
/// `use_mock_backend` is set, the network otherwise.
pub fn build_api_client(config: &AppConfig) -> ApiClient {
    if !config.use_mock_backend {
        log::info!("[API] Using network backend at {}", config.endpoint);
        return ApiClient::new(Rc::new(FetchTransport), config.endpoint.clone());
    }

    match BrowserStorage::local() {
        Ok(store) => mock_client(store, config),
        Err(e) => {
            log::warn!("[API] {}; mock backend falls back to memory", e);
            mock_client(MemoryStorage::new(), config)
        }
    }
}

fn mock_client<S: KeyValueStore + 'static>(store: S, config: &AppConfig) -> ApiClient {
    let storage = DocumentStorage::new(store, config.storage_key.clone());
    let seed = seed_documents().unwrap_or_else(|e| {
        log::error!("[API] Bundled seed data is invalid: {}", e);
        Vec::new()
    });
    if let Err(e) = storage.initialize(&seed) {
        log::error!("[API] Failed to seed storage: {}", e);
    }
    log::info!("[API] Using mock backend on '{}'", storage.key());
    ApiClient::new(Rc::new(MockBackend::new(storage, config.endpoint.clone())), config.endpoint.clone())
}
