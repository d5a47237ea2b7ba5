use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::debug;

/// Custom error type for config loading.
#[wayfarer_derive::wayfarer_error]
pub enum ConfigError {
    #[error("Config parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Parses a page-embedded JSON configuration block.
///
/// The page may carry a `<script type="application/json" id="wayfarer-config">`
/// element. Its text is handed to this function; every key is optional and
/// falls back to the `Default` impl of `T` when the target uses `#[serde(default)]`.
///
/// # Arguments
/// * `raw`: The JSON text. Blank input is treated as `{}`.
///
/// # Errors
/// Returns [`ConfigError::Parse`] when the text is not valid JSON or does not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use wayfarer_kernel::config::load_config;
/// use wayfarer_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(r#"{ "scroll": { "scroll_top_threshold": 500 } }"#).unwrap();
/// assert!((cfg.scroll.scroll_top_threshold - 500.0).abs() < f64::EPSILON);
/// ```
pub fn load_config<T>(raw: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let raw = raw.trim();
    let raw = if raw.is_empty() { "{}" } else { raw };

    debug!(bytes = raw.len(), "Loading page config");

    let config = serde_json::from_str::<T>(raw).context("Failed to deserialize page config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_domain::config::SiteConfig;

    #[test]
    fn test_blank_input_is_default() {
        let cfg: SiteConfig = load_config("   ").unwrap();
        assert_eq!(cfg.notification.display_ms, 3000);
    }

    #[test]
    fn test_parse_error_carries_context() {
        let err = load_config::<SiteConfig>("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Config parse error (Failed to deserialize page config)"));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let err = load_config::<SiteConfig>(r#"{ "scroll": { "reveal_offset": "far" } }"#);
        assert!(matches!(err, Err(ConfigError::Parse { .. })));
    }
}
