//! Remote Store Sync
//!
//! GET/PUT the full idea list against the HTTP API. Transport errors,
//! non-2xx statuses, and malformed bodies all collapse into one
//! `SyncError` that callers log and otherwise ignore; nothing retries.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Idea;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Body(String),
}

fn transport(err: JsValue) -> SyncError {
    SyncError::Transport(format!("{err:?}"))
}

async fn run_fetch(request: &Request) -> Result<Response, SyncError> {
    let window = web_sys::window().ok_or_else(|| SyncError::Transport("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport)?;
    let resp: Response = resp.dyn_into().map_err(transport)?;
    if !resp.ok() {
        return Err(SyncError::Status(resp.status()));
    }
    Ok(resp)
}

/// Fetch the full ordered list from the store
pub async fn load_ideas(api_path: &str) -> Result<Vec<Idea>, SyncError> {
    let request = Request::new_with_str(api_path).map_err(transport)?;
    let resp = run_fetch(&request).await?;
    let body = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    serde_wasm_bindgen::from_value(body).map_err(|e| SyncError::Body(e.to_string()))
}

/// Replace the remote list wholesale (last writer wins, no reconciliation)
pub async fn save_ideas(api_path: &str, ideas: &[Idea]) -> Result<(), SyncError> {
    let body = serde_json::to_string(ideas).map_err(|e| SyncError::Body(e.to_string()))?;
    let init = RequestInit::new();
    init.set_method("PUT");
    init.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(api_path, &init).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    run_fetch(&request).await?;
    Ok(())
}
