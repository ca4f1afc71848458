//! Runtime configuration of the dashboard.
//!
//! The backend origin is taken from the first of:
//! 1. `localStorage["inventario.api_base_url"]` (runtime override)
//! 2. the `INVENTARIO_API_URL` variable at compile time
//! 3. [`DEFAULT_API_BASE_URL`]

use web_sys::window;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const API_BASE_STORAGE_KEY: &str = "inventario.api_base_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin without trailing slash, e.g. `http://localhost:8000`
    pub api_base_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            api_base_url: resolve_base_url(
                load_base_url_from_storage(),
                option_env!("INVENTARIO_API_URL"),
            ),
        }
    }

    /// `path` is expected to start with `/api/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn load_base_url_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
}

/// Blank candidates are skipped.
fn resolve_base_url(stored: Option<String>, compiled: Option<&str>) -> String {
    let chosen = stored
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| compiled.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_API_BASE_URL);
    chosen.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(resolve_base_url(None, None), "http://localhost:8000");
        assert_eq!(AppConfig::default().url("/api/productos/"), "http://localhost:8000/api/productos/");
    }

    #[test]
    fn test_storage_overrides_compiled() {
        assert_eq!(
            resolve_base_url(Some("https://api.tienda.ec/".to_string()), Some("http://build:9000")),
            "https://api.tienda.ec"
        );
        assert_eq!(resolve_base_url(None, Some("http://build:9000//")), "http://build:9000");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        assert_eq!(
            resolve_base_url(Some("   ".to_string()), Some("")),
            DEFAULT_API_BASE_URL
        );
    }
}
