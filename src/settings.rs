//! Runtime settings
//!
//! Read once at start-up from the page URL query string, e.g.
//! `?debug=0&volume=0.5&muted=1&seed=42`. Nothing is persisted.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Show the frame timing overlay
    pub show_debug: bool,
    /// Pop sound volume (0.0 - 1.0)
    pub volume: f64,
    /// Silence the pop sound
    pub muted: bool,
    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_debug: true,
            volume: 1.0,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse a query string (with or without the leading `?`).
    ///
    /// Unknown keys and malformed values are logged and ignored.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let applied = match key {
                "debug" => parse_flag(value).map(|v| settings.show_debug = v),
                "muted" => parse_flag(value).map(|v| settings.muted = v),
                "volume" => value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| settings.volume = v.clamp(0.0, 1.0)),
                "seed" => value.parse::<u64>().ok().map(|v| settings.seed = Some(v)),
                _ => {
                    log::warn!("Ignoring unknown setting '{}'", key);
                    continue;
                }
            };
            if applied.is_none() {
                log::warn!("Ignoring malformed setting {}={:?}", key, value);
            }
        }

        settings
    }

    /// Load settings from the current page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let settings = Self::from_query(&query);
        if let Ok(json) = serde_json::to_string(&settings) {
            log::info!("Settings: {}", json);
        }
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Accepts `1/0`, `true/false`, `on/off`; a bare key means on
fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query(""), Settings::default());
        assert_eq!(Settings::from_query("?"), Settings::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let settings = Settings::from_query("?debug=0&volume=0.25&muted=true&seed=42");
        assert!(!settings.show_debug);
        assert_eq!(settings.volume, 0.25);
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_bare_flag_means_on() {
        let settings = Settings::from_query("muted");
        assert!(settings.muted);
    }

    #[test]
    fn test_volume_clamped() {
        assert_eq!(Settings::from_query("volume=7").volume, 1.0);
        assert_eq!(Settings::from_query("volume=-2").volume, 0.0);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let settings = Settings::from_query("debug=maybe&volume=loud&seed=-1&colour=red");
        assert_eq!(settings, Settings::default());
    }
}
