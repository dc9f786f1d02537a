//! Application Configuration
//!
//! Values are baked in at compile time from environment variables so the
//! static bundle needs no runtime config file.

use log::Level;

/// Backend address used when `REDIRECT_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";

/// Row height of the redirect table in pixels
pub const ROW_HEIGHT_PX: f64 = 50.0;

/// Rows rendered beyond the visible area of the table
pub const TABLE_OVERSCAN: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Build from `REDIRECT_API_BASE` and `REDIRECT_UI_LOG` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("REDIRECT_API_BASE"), option_env!("REDIRECT_UI_LOG"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::Info);
        Self { api_base, log_level }
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/login", self.api_base)
    }

    pub fn redirects_url(&self) -> String {
        format!("{}/api/redirects", self.api_base)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_level, Level::Info);
        assert_eq!(config.login_url(), "http://127.0.0.1:5001/api/login");
        assert_eq!(config.redirects_url(), "http://127.0.0.1:5001/api/redirects");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://redirects.example.com/"), None);
        assert_eq!(config.redirects_url(), "https://redirects.example.com/api/redirects");
    }

    #[test]
    fn test_blank_base_falls_back() {
        let config = AppConfig::from_values(Some("   "), None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).log_level, Level::Debug);
        assert_eq!(AppConfig::from_values(None, Some("WARN")).log_level, Level::Warn);
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, Level::Info);
    }
}
