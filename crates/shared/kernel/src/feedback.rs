//! Error display lifecycle of one form.
//!
//! A control is either clean or flagged with the message of its first failing
//! rule. Typing in a control clears its flag, every submission starts from a
//! clean slate, and an accepted submission leaves the whole form clean.

use crate::validation::{Field, FieldError, validate_form};

/// What one control currently displays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Clean,
    Flagged(FieldError),
}

/// What the page has to do after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Mark these controls; the entered values stay.
    Rejected(Vec<(usize, FieldError)>),
    /// Show the success banner and reset every control.
    Accepted,
}

#[derive(Debug, Clone, Default)]
pub struct FormFeedback {
    fields: Vec<FieldStatus>,
}

impl FormFeedback {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { fields: vec![FieldStatus::Clean; count] }
    }

    /// Drops every earlier flag, then validates the controls as submitted.
    pub fn submit<'a, I>(&mut self, fields: I) -> Submission
    where
        I: IntoIterator<Item = Field<'a>>,
    {
        let fields: Vec<Field<'a>> = fields.into_iter().collect();
        self.fields = vec![FieldStatus::Clean; fields.len()];

        let report = validate_form(fields);
        if report.is_valid() {
            return Submission::Accepted;
        }

        for (index, error) in &report.errors {
            if let Some(slot) = self.fields.get_mut(*index) {
                *slot = FieldStatus::Flagged(*error);
            }
        }
        Submission::Rejected(report.errors)
    }

    /// The user typed in control `index`. Returns what it displayed before.
    pub fn on_input(&mut self, index: usize) -> FieldStatus {
        self.fields.get_mut(index).map(std::mem::take).unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self, index: usize) -> FieldStatus {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// Number of controls currently showing a message.
    #[must_use]
    pub fn flagged(&self) -> usize {
        self.fields.iter().filter(|s| matches!(s, FieldStatus::Flagged(_))).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldKind;

    #[test]
    fn test_fresh_form_is_clean() {
        let feedback = FormFeedback::new(2);
        assert_eq!(feedback.status(0), FieldStatus::Clean);
        assert_eq!(feedback.status(9), FieldStatus::Clean);
        assert_eq!(feedback.flagged(), 0);
    }

    #[test]
    fn test_input_on_unknown_control_is_ignored() {
        let mut feedback = FormFeedback::new(1);
        assert_eq!(feedback.on_input(3), FieldStatus::Clean);
    }

    #[test]
    fn test_submission_tracks_added_controls() {
        let mut feedback = FormFeedback::new(0);
        let outcome = feedback.submit([
            Field::new(FieldKind::Other, "x"),
            Field::new(FieldKind::Tel, "abc"),
        ]);

        assert_eq!(outcome, Submission::Rejected(vec![(1, FieldError::InvalidPhone)]));
        assert_eq!(feedback.status(1), FieldStatus::Flagged(FieldError::InvalidPhone));
    }
}
