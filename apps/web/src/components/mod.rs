//! Page behaviors. Each module exposes one `init` that wires its listeners.

pub mod active_nav;
pub mod forms;
pub mod lazy_images;
pub mod menu;
pub mod scroll_effects;
pub mod scroll_top;
pub mod smooth_scroll;

use crate::dom::Page;
use crate::error::WebError;

pub type Initializer = fn(&Page) -> Result<(), WebError>;

/// Initializers in the order they run at start-up.
pub const INITIALIZERS: [(&str, Initializer); 7] = [
    ("menu", menu::init),
    ("scroll_effects", scroll_effects::init),
    ("scroll_top", scroll_top::init),
    ("forms", forms::init),
    ("lazy_images", lazy_images::init),
    ("smooth_scroll", smooth_scroll::init),
    ("active_nav", active_nav::init),
];
