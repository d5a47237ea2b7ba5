use crate::dom::{Page, listen, set_class};
use crate::error::{JsResultExt, WebError};
use crate::timing::listen_scroll;
use tracing::warn;
use wayfarer_kernel::domain::constants::{SCROLL_TOP_CLASS, SCROLL_TOP_ICON, SCROLL_TOP_LABEL, VISIBLE_CLASS};
use wayfarer_kernel::prelude::scroll_top_visible;

/// Appends the scroll-to-top button and keeps its visibility in sync with the offset.
///
/// # Errors
/// Returns [`WebError`] when the button cannot be created or wired.
pub fn init(page: &Page) -> Result<(), WebError> {
    let button = page.create("button", SCROLL_TOP_CLASS)?;
    button.set_inner_html(SCROLL_TOP_ICON);
    button.set_attribute("aria-label", SCROLL_TOP_LABEL).js_context("Labelling the scroll-to-top button")?;
    page.body()?.append_child(&button)?;

    let threshold = page.config.scroll.scroll_top_threshold;
    let on_scroll = page.clone();
    let shown = button.clone();
    listen_scroll(page, move || {
        let visible = scroll_top_visible(on_scroll.scroll_offset(), threshold);
        if let Err(err) = set_class(&shown, VISIBLE_CLASS, visible) {
            warn!(%err, "Failed to update the scroll-to-top button");
        }
    })?;

    let on_click = page.clone();
    listen(&button, "click", move |_| on_click.smooth_scroll_to(0.0))
}
