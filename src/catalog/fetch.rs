use super::fallback::fallback_categories;
use super::Settings;
use crate::error::SettingsFetchError;
use crate::state::AppState;
use crate::types::{CatalogSource, LoadingState};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Fetch `GET {origin}/settings`
pub async fn fetch_settings(
    client: &reqwest::Client,
    origin: &str,
) -> Result<Settings, SettingsFetchError> {
    let url = format!("{}/settings", origin.trim_end_matches('/'));
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(SettingsFetchError::Status(response.status().as_u16()));
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetch settings, recovering every failure into the built-in demo catalog
pub async fn load_settings(client: &reqwest::Client, origin: &str) -> (Settings, CatalogSource) {
    match fetch_settings(client, origin).await {
        Ok(mut settings) => {
            if settings.categories.is_empty() {
                info!("settings from {origin} define no categories, using demo categories");
                settings.categories = fallback_categories();
            }
            (settings, CatalogSource::Remote)
        }
        Err(e) => {
            warn!("failed to load settings from {origin}: {e}; using demo catalog");
            (Settings::fallback(), CatalogSource::Fallback)
        }
    }
}

/// Spawns a background task that loads the catalog and installs it into state
pub fn load_settings_background(
    state: Arc<RwLock<AppState>>,
    client: reqwest::Client,
    origin: String,
) {
    if let Ok(mut s) = state.write() {
        s.data.loading_state = LoadingState::Fetching;
    }

    tokio::spawn(async move {
        let (settings, source) = load_settings(&client, &origin).await;
        info!(
            "catalog loaded: {} categories, {} endpoints ({source:?})",
            settings.total_categories(),
            settings.total_endpoints()
        );

        if let Ok(mut s) = state.write() {
            s.install_catalog(settings, source);
        }
    });
}
