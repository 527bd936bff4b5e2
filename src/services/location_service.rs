use crate::config::AppConfig;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// A resolved position with a human readable address
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

// Canned positions; there is no real GPS integration
const MOCK_LOCATIONS: [(f64, f64, &str); 3] = [
    (33.6844, 73.0479, "Islamabad, Pakistan"),
    (31.5204, 74.3587, "Lahore, Pakistan"),
    (24.8607, 67.0011, "Karachi, Pakistan"),
];

/// Simulates a GPS fix: waits the configured delay, then picks a canned location
pub async fn current_location(config: &AppConfig) -> Location {
    log::debug!("Using mock location");
    tokio::time::sleep(Duration::from_millis(config.mock_location_delay_ms)).await;

    let mut rng = rand::rng();
    let (latitude, longitude, address) = MOCK_LOCATIONS
        .choose(&mut rng)
        .copied()
        .unwrap_or(MOCK_LOCATIONS[0]);

    Location {
        latitude,
        longitude,
        address: address.to_string(),
    }
}

/// Location to keep once a simulated fix arrives; a position chosen in the
/// meantime wins over the late fix
pub fn resolve_fix(current: Option<Location>, fix: Location) -> Location {
    match current {
        Some(chosen) => {
            log::debug!("Discarding late location fix ({})", fix.address);
            chosen
        }
        None => fix,
    }
}

/// Immediate fixed location for the "use mock location" button
pub fn mock_location() -> Location {
    Location {
        latitude: 33.6844,
        longitude: 73.0479,
        address: "Islamabad, Pakistan (Mock)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_location_is_canned() {
        let config = AppConfig {
            mock_location_delay_ms: 0,
            ..AppConfig::default()
        };
        let location = current_location(&config).await;
        assert!(MOCK_LOCATIONS
            .iter()
            .any(|(lat, lng, addr)| *lat == location.latitude
                && *lng == location.longitude
                && *addr == location.address));
    }

    #[test]
    fn test_mock_location() {
        let location = mock_location();
        assert_eq!(location.address, "Islamabad, Pakistan (Mock)");
        assert_eq!(location.latitude, 33.6844);
    }

    #[tokio::test]
    async fn test_late_fix_keeps_chosen_location() {
        let config = AppConfig {
            mock_location_delay_ms: 0,
            ..AppConfig::default()
        };
        let fix = current_location(&config).await;

        let chosen = resolve_fix(Some(mock_location()), fix.clone());
        assert_eq!(chosen, mock_location());

        assert_eq!(resolve_fix(None, fix.clone()), fix);
    }
}
