use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration shared by every component.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub scroll: ScrollConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into event handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Scroll-driven thresholds, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header switches to the raised shadow strictly above this offset.
    pub header_shadow_threshold: f64,
    /// Scroll-to-top control is shown strictly above this offset.
    pub scroll_top_threshold: f64,
    /// Distance from the viewport bottom an element must clear to be revealed.
    pub reveal_offset: f64,
    /// Throttle interval for scroll handlers; `None` evaluates every event.
    pub throttle_ms: Option<u32>,
}

/// Success banner timing and text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub display_ms: u32,
    pub fade_ms: u32,
    pub success_message: String,
}

/// Browser console logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`, `off`.
    pub level: String,
    /// Optional directive string, e.g. `wayfarer_web=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_shadow_threshold: 50.0,
            scroll_top_threshold: 300.0,
            reveal_offset: 100.0,
            throttle_ms: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            fade_ms: 500,
            success_message: crate::constants::SUCCESS_MESSAGE.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None }
    }
}
