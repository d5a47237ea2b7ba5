use crate::dom::{Page, set_class};
use crate::error::{JsResultExt, WebError};
use tracing::debug;
use wasm_bindgen::JsCast;
use wayfarer_kernel::domain::constants::{ACTIVE_CLASS, NAV_LINKS};
use wayfarer_kernel::prelude::is_active_link;
use web_sys::HtmlAnchorElement;

/// Marks the navigation links that point at the current page.
///
/// # Errors
/// Returns [`WebError::Dom`] when the current location cannot be read.
pub fn init(page: &Page) -> Result<(), WebError> {
    let current = page.window.location().pathname().js_context("Reading the current path")?;

    for link in page.query_all(NAV_LINKS) {
        let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() else { continue };
        let path = anchor.pathname();
        if is_active_link(&current, &path) {
            debug!(path = %path, "Highlighting active navigation link");
            set_class(&link, ACTIVE_CLASS, true)?;
        }
    }
    Ok(())
}
