//! Remote Store Bindings
//!
//! HTTP bindings for the todo REST endpoints, behind a trait so the
//! state machine can be driven against an in-memory store in tests.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{TodoListResponse, TodoPayload};

/// Default service address, matching the development backend.
const API_BASE: &str = "http://localhost:8000";

/// Why a remote call produced no usable response
///
/// Malformed list payloads are deliberately NOT represented here; they are
/// absorbed by the fail-soft decoding in [`TodoListResponse`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    /// The request never produced a response (network, DNS, aborted fetch).
    #[error("{0}")]
    Transport(String),
}

/// Remote todo store operations
///
/// Futures are not `Send`; everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait TodoStore {
    async fn fetch_all(&self) -> Result<TodoListResponse, StoreError>;
    async fn create(&self, payload: &TodoPayload) -> Result<(), StoreError>;
    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Production store reached through the browser `fetch` API
#[derive(Debug, Clone)]
pub struct FetchStore {
    base_url: String,
}

impl FetchStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Issue one request and check its status; any 2xx is a success.
    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&TodoPayload>,
    ) -> Result<Response, StoreError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(payload) = body {
            let json = serde_json::to_string(payload)
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            opts.set_body(&JsValue::from_str(&json));
        }

        let url = format!("{}{}", self.base_url, path);
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| StoreError::Transport(js_message(e)))?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| StoreError::Transport(js_message(e)))?;
        }

        let window = web_sys::window()
            .ok_or_else(|| StoreError::Transport("no window".to_string()))?;
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| StoreError::Transport(js_message(e)))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|e| StoreError::Transport(js_message(e)))?;

        if !response.ok() {
            return Err(StoreError::Status(response.status()));
        }
        Ok(response)
    }
}

impl Default for FetchStore {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl TodoStore for FetchStore {
    async fn fetch_all(&self) -> Result<TodoListResponse, StoreError> {
        let response = self.request("GET", "/api/v1/getTodo", None).await?;
        let json_promise = response
            .json()
            .map_err(|e| StoreError::Transport(js_message(e)))?;
        let json = JsFuture::from(json_promise)
            .await
            .map_err(|e| StoreError::Transport(js_message(e)))?;
        // Shape mismatches fall through to the inert envelope, which the
        // machine turns into an empty snapshot.
        Ok(serde_wasm_bindgen::from_value(json).unwrap_or_default())
    }

    async fn create(&self, payload: &TodoPayload) -> Result<(), StoreError> {
        self.request("POST", "/api/v1/createTodo", Some(payload))
            .await?;
        Ok(())
    }

    async fn update(&self, id: &str, payload: &TodoPayload) -> Result<(), StoreError> {
        self.request("PUT", &format!("/api/v1/updateTodo/{}", id), Some(payload))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.request("DELETE", &format!("/api/v1/deleteTodo/{}", id), None)
            .await?;
        Ok(())
    }
}

/// Best-effort message extraction from a thrown JS value.
fn js_message(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}
