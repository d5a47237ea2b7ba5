use crate::dom::Page;
use crate::error::{JsResultExt, WebError};
use js_sys::{Array, Object};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wayfarer_kernel::domain::constants::{DEFERRED_SRC_ATTR, LAZY_IMAGES};
use wayfarer_kernel::prelude::LazySource;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

#[derive(Debug)]
struct Deferred {
    image: Element,
    source: LazySource,
}

fn load(image: &Element, src: &str) -> Result<(), WebError> {
    image.set_attribute("src", src)?;
    image.remove_attribute(DEFERRED_SRC_ATTR)?;
    Ok(())
}

/// Loads every `img[data-src]` the first time it scrolls into view.
///
/// # Errors
/// Returns [`WebError::Dom`] when the observer cannot be created.
pub fn init(page: &Page) -> Result<(), WebError> {
    let deferred: Vec<Deferred> = page
        .query_all(LAZY_IMAGES)
        .into_iter()
        .filter_map(|image| {
            let src = image.get_attribute(DEFERRED_SRC_ATTR)?;
            Some(Deferred { image, source: LazySource::new(src) })
        })
        .collect();

    if deferred.is_empty() {
        return Ok(());
    }
    debug!(count = deferred.len(), "Deferring images");

    let images = Rc::new(RefCell::new(deferred));
    let state = Rc::clone(&images);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                let target = entry.target();

                let src = state
                    .borrow_mut()
                    .iter_mut()
                    .find(|d| Object::is(&d.image, &target))
                    .and_then(|d| d.source.on_intersection(entry.is_intersecting()));

                if let Some(src) = src {
                    if let Err(err) = load(&target, &src) {
                        warn!(%err, src = %src, "Failed to load deferred image");
                    }
                    observer.unobserve(&target);
                }
            }

            if state.borrow().iter().all(|d| d.source.is_loaded()) {
                debug!("Every deferred image loaded");
                observer.disconnect();
            }
        },
    );

    let observer =
        IntersectionObserver::new(callback.as_ref().unchecked_ref()).js_context("Creating the image observer")?;
    callback.forget();

    for item in images.borrow().iter() {
        observer.observe(&item.image);
    }

    Ok(())
}
