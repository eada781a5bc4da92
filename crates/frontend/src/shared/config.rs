//! Runtime configuration of the console.
//!
//! The gateway endpoint comes from the `endpoint` query parameter of the page
//! URL when present, otherwise from the `SHEET_CONSOLE_ENDPOINT` variable at
//! build time.

use serde::Deserialize;

/// Build-time endpoint, baked in with `SHEET_CONSOLE_ENDPOINT=... trunk build`
const BUILD_ENDPOINT: Option<&str> = option_env!("SHEET_CONSOLE_ENDPOINT");

/// Headers containing one of these (case-insensitive) get a date input
pub const DEFAULT_DATE_MARKERS: &[&str] = &["fecha", "date"];

/// How long a toast stays on screen
pub const DEFAULT_TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: Option<String>,
    pub date_markers: Vec<String>,
    pub toast_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            date_markers: DEFAULT_DATE_MARKERS.iter().map(|m| m.to_string()).collect(),
            toast_ms: DEFAULT_TOAST_MS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    endpoint: Option<String>,
    #[serde(default)]
    date_markers: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from the current window location.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search, BUILD_ENDPOINT)
    }

    /// `search` is the raw `?a=b` part of the page URL.
    pub fn from_query(search: &str, build_endpoint: Option<&str>) -> Self {
        let query: PageQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("Ignoring malformed page query '{}': {}", search, e);
                PageQuery::default()
            }
        };

        let endpoint = query
            .endpoint
            .or_else(|| build_endpoint.map(str::to_string))
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        let mut config = Self {
            endpoint,
            ..Self::default()
        };

        if let Some(markers) = query.date_markers {
            let markers: Vec<String> = markers
                .split(',')
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect();
            if !markers.is_empty() {
                config.date_markers = markers;
            }
        }

        config
    }

    /// True when `header` names a date column.
    pub fn is_date_header(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.date_markers.iter().any(|m| header.contains(m.as_str()))
    }
}
