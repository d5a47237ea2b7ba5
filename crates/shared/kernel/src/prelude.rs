pub use crate::anchor::{AnchorTarget, anchor_destination, scroll_destination};
pub use crate::feedback::{FieldStatus, FormFeedback, Submission};
pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::lazy::LazySource;
pub use crate::menu::MenuController;
pub use crate::navigation::is_active_link;
pub use crate::notification::BannerSchedule;
pub use crate::rate_limit::{Debouncer, Throttle, Ticket};
pub use crate::scroll::{HeaderElevation, RevealTracker, ScrollEffects, ScrollUpdate, scroll_top_visible};
pub use crate::validation::{Field, FieldError, FieldKind, FormReport, validate_field, validate_form};
pub use crate::viewport::{Rect, Viewport};
pub use wayfarer_domain::config::SiteConfig;
pub use wayfarer_domain::menu::MenuState;
