use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:3001";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub(crate) const DEFAULT_CACHE_GC_MS: i64 = 5 * 60 * 1000;

/// There is no auth model; every request runs as this user.
pub(crate) const DEFAULT_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Runtime configuration injected by the hosting page as `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub request_timeout_ms: u32,
    pub cache_gc_ms: i64,
    pub log_level: log::Level,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            cache_gc_ms: DEFAULT_CACHE_GC_MS,
            log_level: log::Level::Info,
        }
    }
}

impl EnvConfig {
    /// Reads `window.ENV`. Both `API_URL` and `api_url` spellings are accepted.
    pub fn from_window() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::default();
        };

        let get = |key: &str| -> Option<String> {
            js_sys::Reflect::get(&env, &key.into())
                .ok()
                .and_then(|v| v.as_string().or_else(|| v.as_f64().map(|n| n.to_string())))
        };

        Self::from_lookup(|key| get(key).or_else(|| get(&key.to_lowercase())))
    }

    /// Builds a config from a key lookup, keeping defaults for missing or malformed values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(url) = lookup("API_URL").filter(|u| !u.trim().is_empty()) {
            cfg.api_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(ms) = lookup("REQUEST_TIMEOUT_MS")
            .and_then(|v| parse_number(&v))
            .and_then(|ms| u32::try_from(ms).ok())
            .filter(|ms| *ms > 0)
        {
            cfg.request_timeout_ms = ms;
        }

        if let Some(ms) = lookup("CACHE_GC_MS")
            .and_then(|v| parse_number(&v))
            .filter(|ms| *ms >= 0)
        {
            cfg.cache_gc_ms = ms;
        }

        if let Some(level) = lookup("LOG_LEVEL").and_then(|v| v.trim().parse().ok()) {
            cfg.log_level = level;
        }

        cfg
    }
}

// window.ENV values may arrive as JS numbers ("15000") or strings ("15000.0" after f64 formatting).
fn parse_number(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let cfg = EnvConfig::from_lookup(|_| None);
        assert_eq!(cfg, EnvConfig::default());
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let cfg = EnvConfig::from_lookup(lookup_from(&[("API_URL", "https://api.example.com/")]));
        assert_eq!(cfg.api_url, "https://api.example.com");
    }

    #[test]
    fn test_numeric_values_parsed() {
        let cfg = EnvConfig::from_lookup(lookup_from(&[
            ("REQUEST_TIMEOUT_MS", "2500"),
            ("CACHE_GC_MS", "60000.0"),
            ("LOG_LEVEL", "debug"),
        ]));
        assert_eq!(cfg.request_timeout_ms, 2500);
        assert_eq!(cfg.cache_gc_ms, 60_000);
        assert_eq!(cfg.log_level, log::Level::Debug);
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        let cfg = EnvConfig::from_lookup(lookup_from(&[
            ("REQUEST_TIMEOUT_MS", "soon"),
            ("LOG_LEVEL", "loud"),
            ("API_URL", "   "),
        ]));
        assert_eq!(cfg, EnvConfig::default());
    }

    #[test]
    fn test_out_of_range_durations_keep_defaults() {
        let cfg = EnvConfig::from_lookup(lookup_from(&[
            ("REQUEST_TIMEOUT_MS", "4294967296"),
            ("CACHE_GC_MS", "-1"),
        ]));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(cfg.cache_gc_ms, DEFAULT_CACHE_GC_MS);

        let cfg = EnvConfig::from_lookup(lookup_from(&[
            ("REQUEST_TIMEOUT_MS", "-5"),
            ("CACHE_GC_MS", "0"),
        ]));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(cfg.cache_gc_ms, 0);
    }

    #[test]
    fn test_zero_timeout_ignored() {
        let cfg = EnvConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_MS", "0")]));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
