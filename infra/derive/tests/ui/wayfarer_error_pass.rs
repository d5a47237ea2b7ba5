use std::borrow::Cow;
use wayfarer_derive::wayfarer_error;

#[wayfarer_error]
pub enum PageError {
    #[error("Number parse error{}: {source}", format_context(.context))]
    Parse {
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing element{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn threshold(raw: &str) -> Result<u32, PageError> {
    raw.parse::<u32>().context("Reading scroll threshold")
}

fn header() -> Result<(), PageError> {
    Err(PageError::Missing { message: ".main-header".into(), context: None })
}

fn main() {
    let err = threshold("fifty").unwrap_err();
    assert!(err.to_string().starts_with("Number parse error (Reading scroll threshold): "));

    let err = header().context("Scroll effects").unwrap_err();
    assert_eq!(err.to_string(), "Missing element (Scroll effects): .main-header");

    let err: PageError = "no window".into();
    assert_eq!(err.to_string(), "Internal error: no window");

    let err: PageError = "7x".parse::<u32>().unwrap_err().into();
    assert!(matches!(err, PageError::Parse { context: None, .. }));
}
