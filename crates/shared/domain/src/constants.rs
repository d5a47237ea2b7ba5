//! The DOM contract: selectors this code consumes, class names it produces,
//! and the fixed strings and inline styles it writes.

// --- Consumed selectors ---

pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";
pub const MAIN_NAV: &str = ".main-nav";
pub const NAV_LINKS: &str = ".main-nav a";
pub const MAIN_HEADER: &str = ".main-header";
pub const REVEAL_TARGETS: &str = ".scroll-reveal";
pub const FORMS: &str = "form";
pub const FORM_CONTROLS: &str = ".form-control";
pub const LAZY_IMAGES: &str = "img[data-src]";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const CONFIG_SCRIPT_ID: &str = "wayfarer-config";

// --- Attributes ---

pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const REQUIRED_ATTR: &str = "required";

// --- Produced classes ---

pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "revealed";
pub const VISIBLE_CLASS: &str = "visible";
pub const OVERLAY_CLASS: &str = "menu-overlay";
pub const SCROLL_TOP_CLASS: &str = "scroll-to-top";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const SUCCESS_CLASS: &str = "success-notification";

// --- Messages ---

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

// --- Inline styles ---

pub const SHADOW_RAISED: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";
pub const SHADOW_RESTING: &str = "0 2px 4px rgba(0, 0, 0, 0.08)";
pub const ERROR_COLOR: &str = "#dc3545";
pub const ERROR_FONT_SIZE: &str = "0.875rem";
pub const ERROR_MARGIN_TOP: &str = "0.25rem";
pub const SCROLL_TOP_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;
pub const SCROLL_TOP_LABEL: &str = "Scroll to top";
pub const SUCCESS_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background-color: #28a745; color: white; padding: 1rem 1.5rem; border-radius: 8px; \
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 9999; \
    animation: fadeInRight 0.5s ease;";
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.5s ease";
pub const SCROLL_LOCK: &str = "hidden";
