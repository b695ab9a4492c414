//! Typed wrappers over the Tauri `invoke` bridge.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{DharmaWord, ShareTarget};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Request structure for `open_share_link` IPC
#[derive(Serialize)]
struct OpenShareLinkArgs<'a> {
    target: ShareTarget,
    text: &'a str,
    url: &'a str,
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Ask the backend for a new Dharma word.
///
/// # Errors
/// Returns the backend's error message, or a description of the IPC failure.
pub async fn fetch_dharma_word() -> Result<DharmaWord, String> {
    let result = invoke("fetch_dharma_word", JsValue::NULL)
        .await
        .map_err(|e| describe(&e))?;

    serde_wasm_bindgen::from_value::<DharmaWord>(result)
        .map_err(|e| format!("Failed to parse Dharma word: {e}"))
}

/// Ask the backend to open a share link in the system browser.
pub async fn open_share_link(target: ShareTarget, text: &str, url: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&OpenShareLinkArgs { target, text, url })
        .map_err(|e| format!("Failed to serialize share args: {e}"))?;

    invoke("open_share_link", args)
        .await
        .map(|_| ())
        .map_err(|e| describe(&e))
}
