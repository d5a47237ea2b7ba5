//! Client-side form validation.
//!
//! Rules run in a fixed order per field: the required check first, then the
//! type-specific pattern. The first failing rule is the only message shown.

use regex::Regex;
use std::sync::LazyLock;
use wayfarer_domain::constants::{EMAIL_MESSAGE, PHONE_MESSAGE, REQUIRED_MESSAGE};

// U+FEFF counts as whitespace in browsers but not in Unicode `\s`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

// ASCII digits only.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

/// Declared input type, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Other,
}

impl From<&str> for FieldKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "tel" => Self::Tel,
            _ => Self::Other,
        }
    }
}

/// Snapshot of a form control at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub required: bool,
    pub kind: FieldKind,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn new(kind: FieldKind, value: &'a str) -> Self {
        Self { required: false, kind, value }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A failed rule. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", REQUIRED_MESSAGE)]
    Required,
    #[error("{}", EMAIL_MESSAGE)]
    InvalidEmail,
    #[error("{}", PHONE_MESSAGE)]
    InvalidPhone,
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validates one field.
///
/// # Errors
/// Returns the first failing rule: [`FieldError::Required`] for a required
/// field whose trimmed value is empty, otherwise the type-specific error for a
/// non-empty value that does not match its pattern.
pub fn validate_field(field: &Field<'_>) -> Result<(), FieldError> {
    if field.required && is_blank(field.value) {
        return Err(FieldError::Required);
    }

    if field.value.is_empty() {
        return Ok(());
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(field.value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(field.value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Outcome of validating every control of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// `(field index, error)` in field order, at most one per field.
    pub errors: Vec<(usize, FieldError)>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates every field; nothing is cached between submissions.
pub fn validate_form<'a, I>(fields: I) -> FormReport
where
    I: IntoIterator<Item = Field<'a>>,
{
    let errors = fields
        .into_iter()
        .enumerate()
        .filter_map(|(index, field)| validate_field(&field).err().map(|e| (index, e)))
        .collect();

    FormReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_precedes_type_checks() {
        let field = Field::new(FieldKind::Email, "   ").required();
        assert_eq!(validate_field(&field), Err(FieldError::Required));

        let field = Field::new(FieldKind::Tel, "").required();
        assert_eq!(validate_field(&field), Err(FieldError::Required));
    }

    #[test]
    fn test_optional_empty_passes() {
        assert_eq!(validate_field(&Field::new(FieldKind::Email, "")), Ok(()));
        assert_eq!(validate_field(&Field::new(FieldKind::Tel, "")), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("traveller@asia-tours.co.th"));
        assert!(!is_valid_email("traveller.asia-tours.com"));
        assert!(!is_valid_email("traveller@asia-tours"));
        assert!(!is_valid_email("trav eller@asia.com"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_email_rejects_invisible_spaces() {
        assert!(!is_valid_email("a\u{FEFF}@b.c"));
        assert!(!is_valid_email("a@b\u{FEFF}.c"));
        assert!(!is_valid_email("a@b.c\u{FEFF}"));
        assert!(!is_valid_email("a\u{00A0}@b.c"));
        assert_eq!(
            validate_field(&Field::new(FieldKind::Email, "a\u{FEFF}@b.c")),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_byte_order_mark_alone_is_blank() {
        let field = Field::new(FieldKind::Other, "\u{FEFF} ").required();
        assert_eq!(validate_field(&field), Err(FieldError::Required));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+66 (0) 2-123-4567"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("555-0100 ext. 2"));
        // Non-ASCII digits are rejected.
        assert!(!is_valid_phone("٠١٢٣"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(FieldError::InvalidPhone.to_string(), "Please enter a valid phone number");
    }

    #[test]
    fn test_kind_from_type_attribute() {
        assert_eq!(FieldKind::from("email"), FieldKind::Email);
        assert_eq!(FieldKind::from("TEL"), FieldKind::Tel);
        assert_eq!(FieldKind::from("textarea"), FieldKind::Other);
    }

    #[test]
    fn test_form_report_indexes() {
        let report = validate_form([
            Field::new(FieldKind::Other, "Somchai").required(),
            Field::new(FieldKind::Email, "nope"),
            Field::new(FieldKind::Tel, "").required(),
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.errors, vec![(1, FieldError::InvalidEmail), (2, FieldError::Required)]);
    }
}
