//! # Wayfarer Web
//!
//! The WebAssembly bundle behind the travel site's static pages. Loading the
//! module runs [`start`], which reads the optional page config, installs
//! console logging and wires every page behavior exactly once.
//!
//! ```html
//! <script type="application/json" id="wayfarer-config">
//!   { "scroll": { "throttle_ms": 16 }, "logging": { "level": "debug" } }
//! </script>
//! <script type="module">
//!   import init from "./pkg/wayfarer_web.js";
//!   await init();
//! </script>
//! ```

pub mod components;
pub mod dom;
pub mod error;
pub mod timing;

pub use crate::error::{WebError, WebErrorExt};
pub use crate::timing::{debounce, is_in_viewport, throttle};

use crate::components::INITIALIZERS;
use crate::dom::Page;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wayfarer_kernel::config::{ConfigError, load_config};
use wayfarer_kernel::domain::config::LoggingConfig;
use wayfarer_kernel::domain::constants::CONFIG_SCRIPT_ID;
use wayfarer_kernel::prelude::SiteConfig;
use wayfarer_logger::{LevelFilter, Logger, LoggerError, parse_level};

/// A fluent builder for the [`Site`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SiteBuilder {
    cfg: SiteConfig,
}

impl SiteBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Binds the builder to the current window and document.
    ///
    /// # Errors
    /// Returns [`WebError::MissingElement`] outside a browsing context.
    pub fn build(self) -> Result<Site, WebError> {
        Ok(Site { page: Page::current(self.cfg)? })
    }
}

/// Every behavior of one loaded page.
#[derive(Debug)]
pub struct Site {
    page: Page,
}

impl Site {
    pub fn builder() -> SiteBuilder {
        SiteBuilder::default()
    }

    /// Runs each initializer once, in order. A failing initializer is logged
    /// and the rest still run. Returns how many failed.
    pub fn run(&self) -> usize {
        let mut failed = 0;
        for (name, init) in INITIALIZERS {
            match init(&self.page) {
                Ok(()) => debug!(component = name, "Initialized"),
                Err(err) => {
                    failed += 1;
                    warn!(component = name, %err, "Initialization failed");
                },
            }
        }
        failed
    }
}

/// Text of the embedded `<script id="wayfarer-config">` block, if any.
fn page_config_text() -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()
}

fn read_page_config() -> Result<SiteConfig, ConfigError> {
    page_config_text().map_or_else(|| Ok(SiteConfig::default()), |raw| load_config(&raw))
}

fn init_logging(cfg: &LoggingConfig) -> Result<Logger, LoggerError> {
    let level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    match &cfg.filter {
        Some(filter) => builder.env_filter(filter.as_str()).init(),
        None => builder.init(),
    }
}

/// Module entry point, run by the browser once the bundle is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = read_page_config();
    let logging = config.as_ref().map(|cfg| cfg.logging.clone()).unwrap_or_default();
    let logger = init_logging(&logging);

    if let Err(err) = &logger {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Console logging unavailable: {err}")));
    }
    if let Err(err) = parse_level(&logging.level) {
        warn!(%err, "Falling back to the info level");
    }

    let config = config.unwrap_or_else(|err| {
        warn!(%err, "Ignoring the page config");
        SiteConfig::default()
    });

    match Site::builder().config(config).build() {
        Ok(site) => {
            let failed = site.run();
            info!(components = INITIALIZERS.len(), failed, "Site behaviors ready");
        },
        Err(err) => warn!(%err, "No page to attach to"),
    }
}
