//! Rate-limited callbacks, both for the bundle's own scroll handlers and for
//! page scripts through the `debounce`, `throttle` and `isInViewport` exports.

use crate::dom::{Page, listen, viewport_of};
use crate::error::WebError;
use js_sys::{Array, Date, Function};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wayfarer_kernel::prelude::{Debouncer, Rect, Throttle};
use web_sys::Element;

/// Optional throttle in front of a scroll handler.
#[derive(Debug, Default)]
pub struct ScrollGate(Option<Throttle>);

impl ScrollGate {
    #[must_use]
    pub fn new(limit_ms: Option<u32>) -> Self {
        Self(limit_ms.map(Throttle::new))
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        self.0.as_mut().is_none_or(|throttle| throttle.try_acquire(now_ms))
    }
}

/// Runs `handler` on window scroll, throttled when `scroll.throttle_ms` is set.
///
/// # Errors
/// Returns [`WebError::Dom`] when the listener cannot be attached.
pub fn listen_scroll<H>(page: &Page, mut handler: H) -> Result<(), WebError>
where
    H: FnMut() + 'static,
{
    let mut gate = ScrollGate::new(page.config.scroll.throttle_ms);
    listen(&page.window, "scroll", move |_| {
        if gate.admit(Date::now()) {
            handler();
        }
    })
}

// Hands `this` and the full argument list of every call to `inner`.
#[wasm_bindgen(inline_js = "export function forwardCalls(inner) { return function (...args) { return inner(this, args); }; }")]
extern "C" {
    #[wasm_bindgen(js_name = forwardCalls)]
    fn forward_calls(inner: &JsValue) -> Function;
}

/// Exposes a Rust closure as a JS function that receives `this` and every argument.
fn forwarding<H>(handler: H) -> Function
where
    H: FnMut(JsValue, Array) + 'static,
{
    let inner = Closure::<dyn FnMut(JsValue, Array)>::new(handler);
    forward_calls(&inner.into_js_value())
}

fn invoke(func: &Function, this: &JsValue, args: &Array) {
    if let Err(err) = func.apply(this, args) {
        warn!(?err, "Rate-limited callback threw");
    }
}

/// Wraps `func` so it runs `wait_ms` after the last call, with every argument
/// of that call.
///
/// Superseded timers still elapse but find a newer ticket and do nothing.
///
/// # Errors
/// Throws when called outside a browsing context.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait_ms: u32) -> Result<Function, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("debounce needs a window"))?;
    let state = Rc::new(RefCell::new(Debouncer::<Array>::new(wait_ms)));

    Ok(forwarding(move |_this: JsValue, args: Array| {
        let ticket = state.borrow_mut().schedule(args);
        let fired = Rc::clone(&state);
        let func = func.clone();

        let callback = Closure::once_into_js(move || {
            let due = fired.borrow_mut().fire(ticket);
            if let Some(args) = due {
                invoke(&func, &JsValue::UNDEFINED, &args);
            }
        });

        let wait = i32::try_from(state.borrow().wait_ms()).unwrap_or(i32::MAX);
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), wait)
        {
            warn!(?err, "Failed to schedule debounced call");
        }
    }))
}

/// Wraps `func` so it runs at most once per `limit_ms` with the caller's `this`
/// and arguments; calls inside the cooldown are dropped.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle(func: Function, limit_ms: u32) -> Function {
    let mut gate = Throttle::new(limit_ms);
    forwarding(move |this: JsValue, args: Array| {
        if gate.try_acquire(Date::now()) {
            invoke(&func, &this, &args);
        }
    })
}

/// `true` when `element` lies entirely inside the viewport.
#[wasm_bindgen(js_name = isInViewport)]
pub fn is_in_viewport(element: &Element) -> bool {
    let Some(window) = web_sys::window() else { return false };
    let rect = element.get_bounding_client_rect();
    Rect { top: rect.top(), left: rect.left(), bottom: rect.bottom(), right: rect.right() }
        .is_within(viewport_of(&window))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_without_limit_admits_everything() {
        let mut gate = ScrollGate::new(None);
        assert!((0..5).all(|i| gate.admit(f64::from(i))));
    }

    #[test]
    fn test_gate_with_limit_drops_inside_cooldown() {
        let mut gate = ScrollGate::new(Some(100));
        assert!(gate.admit(0.0));
        assert!(!gate.admit(50.0));
        assert!(gate.admit(100.0));
    }
}
