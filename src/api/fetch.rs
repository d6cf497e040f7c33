//! Browser Fetch Transport

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::{js_error_message, ApiError, ApiResult};

/// Sends requests through `window.fetch`
pub struct FetchTransport;

fn transport_error(value: JsValue) -> ApiError {
    ApiError::Transport(js_error_message(&value))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.path, &init).map_err(transport_error)?;
        if request.body.is_some() {
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(transport_error)?;
        }

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport_error)?;
        let resp: Response = resp_value.dyn_into().map_err(transport_error)?;
        let text = JsFuture::from(resp.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        Ok(HttpResponse {
            status: resp.status(),
            status_text: resp.status_text(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
