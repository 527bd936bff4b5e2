use crate::config::AppConfig;
use crate::error::AppError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Resolves a coordinate pair to a short address.
///
/// Any lookup failure falls back to the formatted coordinates.
pub async fn get_address(config: &AppConfig, lat: f64, lng: f64) -> String {
    match reverse_lookup(config, lat, lng).await {
        Ok(Some(name)) => short_address(&name),
        Ok(None) => format_coordinates(lat, lng),
        Err(e) => {
            log::info!("Geocoding failed: {}", e);
            format_coordinates(lat, lng)
        }
    }
}

async fn reverse_lookup(config: &AppConfig, lat: f64, lng: f64) -> Result<Option<String>, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;

    let response = client
        .get(&config.geocode_url)
        .query(&[
            ("format", "json".to_string()),
            ("lat", lat.to_string()),
            ("lon", lng.to_string()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::Network(format!(
            "Geocoder returned status: {}",
            response.status()
        )));
    }

    let body: ReverseResponse = response.json().await?;
    Ok(body.display_name.filter(|n| !n.trim().is_empty()))
}

/// First three comma-separated parts of a Nominatim display name
pub fn short_address(display_name: &str) -> String {
    display_name
        .split(',')
        .take(3)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}
