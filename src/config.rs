use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

/// Output format of log events on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn from_setting(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint the year and country code are appended to.
    pub api_base_url: String,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Reads `HOLIDAYS_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("HOLIDAYS_API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let request_timeout = lookup("HOLIDAYS_REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let log_format = lookup("HOLIDAYS_LOG_FORMAT")
            .map(|s| LogFormat::from_setting(&s))
            .unwrap_or_default();

        Self {
            api_base_url,
            request_timeout,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOLIDAYS_API_BASE_URL", "http://localhost:8080/api/"),
            ("HOLIDAYS_REQUEST_TIMEOUT_SECS", "5"),
            ("HOLIDAYS_LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(config.api_base_url, "http://localhost:8080/api/");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("HOLIDAYS_API_BASE_URL", "  "),
            ("HOLIDAYS_REQUEST_TIMEOUT_SECS", "soon"),
            ("HOLIDAYS_LOG_FORMAT", "yaml"),
        ]);
        assert_eq!(config, Config::default());
    }
}
