use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

use crate::models::{share_link, DharmaWord, ShareTarget};
use crate::state::DharmaService;

/// Generate a new Dharma word.
///
/// # Arguments
/// * `state` - Tauri managed `DharmaService` state
///
/// # Returns
/// * `Ok(DharmaWord)` - A validated word
/// * `Err(String)` - Description of the configuration, network, or parsing failure
#[tauri::command]
pub async fn fetch_dharma_word(state: State<'_, DharmaService>) -> Result<DharmaWord, String> {
    state
        .fetch_dharma_word()
        .await
        .map_err(|e| e.to_string())
}

/// Open a share link for `target` in the system browser.
///
/// # Arguments
/// * `target` - Destination network
/// * `text` - Text to share
/// * `url` - Page address to share alongside the text
/// * `app` - Tauri app handle used to reach the opener plugin
///
/// # Returns
/// * `Ok(())` - The browser was asked to open the link
/// * `Err(String)` - The opener refused or failed
#[tauri::command]
pub async fn open_share_link(
    target: ShareTarget,
    text: String,
    url: String,
    app: AppHandle,
) -> Result<(), String> {
    let link = share_link(target, &text, &url);
    tracing::info!("Opening {} share link", target.label());
    tracing::debug!("Share link: {}", link);

    app.opener().open_url(link, None::<&str>).map_err(|e| {
        tracing::error!("Failed to open {} share link: {}", target.label(), e);
        format!("Failed to open {}: {e}", target.label())
    })
}

