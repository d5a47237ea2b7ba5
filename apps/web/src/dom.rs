//! Thin helpers over `web-sys` shared by every component.

use crate::error::{JsResultExt, WebError};
use std::borrow::Cow;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window,
};
use wayfarer_kernel::prelude::{SiteConfig, Viewport};

/// Handles every component needs: the window, its document and the site config.
#[derive(Debug, Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
}

impl Page {
    /// # Errors
    /// Returns [`WebError::MissingElement`] outside a browsing context.
    pub fn current(config: SiteConfig) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or_else(|| WebError::missing("window"))?;
        let document = window.document().ok_or_else(|| WebError::missing("document"))?;
        Ok(Self { window, document, config })
    }

    /// # Errors
    /// Returns [`WebError::MissingElement`] when the document has no body yet.
    pub fn body(&self) -> Result<HtmlElement, WebError> {
        self.document.body().ok_or_else(|| WebError::missing("document body"))
    }

    /// First element matching `selector`. An invalid selector counts as no match.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).unwrap_or_else(|err| {
            debug!(selector, ?err, "Selector rejected by the document");
            None
        })
    }

    /// First element matching `selector`, as an `HtmlElement`.
    #[must_use]
    pub fn query_html(&self, selector: &str) -> Option<HtmlElement> {
        self.query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                warn!(selector, ?err, "Selector rejected by the document");
                Vec::new()
            },
        }
    }

    /// # Errors
    /// Returns [`WebError::Dom`] when the element cannot be created.
    pub fn create(&self, tag: &str, class: &str) -> Result<HtmlElement, WebError> {
        let element = self.document.create_element(tag).js_context(format!("Creating <{tag}>"))?;
        element.set_class_name(class);
        element
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::from(format!("<{tag}> is not an HTML element")))
    }

    /// Vertical scroll offset of the page, in CSS pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        viewport_of(&self.window)
    }

    /// Smoothly scrolls the window to the vertical position `top`.
    pub fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Runs `callback` once after `ms` milliseconds and returns the timer handle.
    ///
    /// # Errors
    /// Returns [`WebError::Dom`] when the browser refuses the timer.
    pub fn set_timeout<F>(&self, ms: u32, callback: F) -> Result<i32, WebError>
    where
        F: FnOnce() + 'static,
    {
        let callback = Closure::once_into_js(callback);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                i32::try_from(ms).unwrap_or(i32::MAX),
            )
            .js_context("Scheduling a timer")
    }
}

/// Inner size of `window`, falling back to the root element's client size.
#[must_use]
pub fn viewport_of(window: &Window) -> Viewport {
    let root = window.document().and_then(|doc| doc.document_element());
    let measure = |value: Result<JsValue, JsValue>, client: fn(&Element) -> i32| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .or_else(|| root.as_ref().map(|el| f64::from(client(el))))
            .unwrap_or_default()
    };

    Viewport {
        width: measure(window.inner_width(), Element::client_width),
        height: measure(window.inner_height(), Element::client_height),
    }
}

/// Elements matching `selector` below `root`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(|list| elements(&list)).unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns [`WebError::Dom`] when the listener cannot be attached.
pub fn listen<H>(target: &EventTarget, event: &'static str, handler: H) -> Result<(), WebError>
where
    H: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .js_context(Cow::Owned(format!("Listening for '{event}'")))?;
    closure.forget();
    Ok(())
}

/// Sets one inline style property.
///
/// # Errors
/// Returns [`WebError::Dom`] when the property is rejected.
pub fn set_style(element: &HtmlElement, property: &'static str, value: &str) -> Result<(), WebError> {
    element
        .style()
        .set_property(property, value)
        .js_context(Cow::Owned(format!("Setting style '{property}'")))
}

/// Adds `class` when `on`, removes it otherwise.
///
/// # Errors
/// Returns [`WebError::Dom`] when the class token is rejected.
pub fn set_class(element: &Element, class: &'static str, on: bool) -> Result<(), WebError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(drop)
        .js_context(Cow::Owned(format!("Switching class '{class}'")))
}
