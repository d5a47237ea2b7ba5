use crate::dom::{Page, listen};
use crate::error::WebError;
use tracing::trace;
use wasm_bindgen::JsCast;
use wayfarer_kernel::domain::constants::{ANCHOR_LINKS, MAIN_HEADER};
use wayfarer_kernel::prelude::anchor_destination;
use web_sys::{Element, HtmlElement};

/// Document-relative top of `target`.
fn offset_top(page: &Page, target: &Element) -> f64 {
    target.dyn_ref::<HtmlElement>().map_or_else(
        || target.get_bounding_client_rect().top() + page.scroll_offset(),
        |html| f64::from(html.offset_top()),
    )
}

fn follow(page: &Page, href: &str) {
    let header = page.query_html(MAIN_HEADER).map_or(0.0, |h| f64::from(h.offset_height()));
    let destination = anchor_destination(href, header, |selector| {
        page.query(selector).map(|target| offset_top(page, &target))
    });

    match destination {
        Some(top) => page.smooth_scroll_to(top),
        None => trace!(href, "Anchor has no target on this page"),
    }
}

/// Smooth scrolling for same-page anchors, clearing the fixed header.
///
/// # Errors
/// Returns [`WebError`] when a listener cannot be attached.
pub fn init(page: &Page) -> Result<(), WebError> {
    for anchor in page.query_all(ANCHOR_LINKS) {
        let on_click = page.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                follow(&on_click, &href);
            }
        })?;
    }
    Ok(())
}
