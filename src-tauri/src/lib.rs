pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod state;

use commands::dharma::{fetch_dharma_word, open_share_link};
use logging::setup_logging;
use state::DharmaService;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging before starting Tauri
    if let Err(e) = setup_logging() {
        eprintln!("Warning: Failed to setup logging: {e}");
    }

    tracing::info!("Starting Dharma Words application");

    // Configuration is validated once here; a missing credential surfaces on each fetch
    let service = DharmaService::from_env();
    if !service.is_configured() {
        tracing::warn!("Starting without a usable word provider");
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(service)
        .invoke_handler(tauri::generate_handler![fetch_dharma_word, open_share_link])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
