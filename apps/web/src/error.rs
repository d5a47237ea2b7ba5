use std::borrow::Cow;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while wiring behaviors to the page.
#[wayfarer_derive::wayfarer_error]
pub enum WebError {
    #[error("DOM error{}: {message}", format_context(.context))]
    Dom { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Missing element{}: {message}", format_context(.context))]
    MissingElement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl WebError {
    pub fn missing(what: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingElement { message: what.into(), context: None }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Dom { message: describe(&value).into(), context: None }
    }
}

/// Attaches context to a failed web-sys call.
pub trait JsResultExt<T> {
    /// # Errors
    /// Returns [`WebError::Dom`] carrying the JS exception text and `context`.
    fn js_context(self, context: impl Into<Cow<'static, str>>) -> Result<T, WebError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn js_context(self, context: impl Into<Cow<'static, str>>) -> Result<T, WebError> {
        self.map_err(WebError::from).context(context)
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
