//! Client-side validation for every form on the page.
//!
//! Submission is always intercepted. A valid form shows the success banner and
//! resets; an invalid one marks each failing control with a single message.

use crate::dom::{Page, listen, query_all_in, set_style};
use crate::error::WebError;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, trace, warn};
use wasm_bindgen::JsCast;
use wayfarer_kernel::domain::constants::{
    ERROR_COLOR, ERROR_FONT_SIZE, ERROR_MARGIN_TOP, ERROR_MESSAGE_CLASS, FADE_OUT_ANIMATION, FORMS,
    FORM_CONTROLS, REQUIRED_ATTR, SUCCESS_CLASS, SUCCESS_STYLE,
};
use wayfarer_kernel::prelude::{BannerSchedule, Field, FieldError, FieldKind, FieldStatus, FormFeedback, Submission};
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Value and declared type of a control, read at submission time.
#[derive(Debug)]
struct Snapshot {
    kind: String,
    value: String,
    required: bool,
}

fn snapshot(control: &Element) -> Snapshot {
    let (kind, value) = if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        (input.type_(), input.value())
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        (area.type_(), area.value())
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        (select.type_(), select.value())
    } else {
        (String::new(), control.text_content().unwrap_or_default())
    };

    Snapshot { kind, value, required: control.has_attribute(REQUIRED_ATTR) }
}

fn clear_error(control: &Element) -> Result<(), WebError> {
    if let Some(html) = control.dyn_ref::<HtmlElement>() {
        html.style().remove_property("border-color")?;
    }
    if let Some(message) = control
        .parent_element()
        .and_then(|parent| parent.query_selector(&format!(".{ERROR_MESSAGE_CLASS}")).ok().flatten())
    {
        message.remove();
    }
    Ok(())
}

fn show_error(page: &Page, control: &Element, error: FieldError) -> Result<(), WebError> {
    clear_error(control)?;
    if let Some(html) = control.dyn_ref::<HtmlElement>() {
        set_style(html, "border-color", ERROR_COLOR)?;
    }

    let Some(parent) = control.parent_element() else {
        debug!("Invalid control has no parent to hold its message");
        return Ok(());
    };

    let message = page.create("div", ERROR_MESSAGE_CLASS)?;
    message.set_text_content(Some(&error.to_string()));
    set_style(&message, "color", ERROR_COLOR)?;
    set_style(&message, "font-size", ERROR_FONT_SIZE)?;
    set_style(&message, "margin-top", ERROR_MARGIN_TOP)?;
    parent.append_child(&message)?;
    Ok(())
}

/// Shows the success banner and schedules its fade-out and removal.
fn show_banner(page: &Page) -> Result<(), WebError> {
    let notification = &page.config.notification;
    let schedule = BannerSchedule::from(notification);

    let banner = page.create("div", SUCCESS_CLASS)?;
    banner.style().set_css_text(SUCCESS_STYLE);
    banner.set_text_content(Some(&notification.success_message));
    page.body()?.append_child(&banner)?;

    let timers = page.clone();
    page.set_timeout(schedule.fade_after(), move || {
        if let Err(err) = set_style(&banner, "animation", FADE_OUT_ANIMATION) {
            warn!(%err, "Failed to fade the success banner");
        }
        let fading = banner.clone();
        if let Err(err) = timers.set_timeout(schedule.remove_after_fade(), move || fading.remove()) {
            warn!(%err, "Failed to schedule banner removal");
            banner.remove();
        }
    })?;

    Ok(())
}

fn on_submit(page: &Page, form: &HtmlFormElement, feedback: &RefCell<FormFeedback>) -> Result<(), WebError> {
    let controls = query_all_in(form, FORM_CONTROLS);
    let snapshots: Vec<Snapshot> = controls.iter().map(snapshot).collect();

    for control in &controls {
        clear_error(control)?;
    }

    let (outcome, flagged) = {
        let mut state = feedback.borrow_mut();
        let outcome = state.submit(snapshots.iter().map(|s| {
            let field = Field::new(FieldKind::from(s.kind.as_str()), &s.value);
            if s.required { field.required() } else { field }
        }));
        (outcome, state.flagged())
    };

    match outcome {
        Submission::Rejected(errors) => {
            debug!(flagged, "Form rejected");
            for (index, error) in errors {
                if let Some(control) = controls.get(index) {
                    show_error(page, control, error)?;
                }
            }
        },
        Submission::Accepted => {
            info!(form = %form.id(), "Form accepted");
            show_banner(page)?;
            form.reset();
        },
    }
    Ok(())
}

/// Intercepts submission of every form and clears errors as the user types.
///
/// # Errors
/// Returns [`WebError`] when a listener cannot be attached.
pub fn init(page: &Page) -> Result<(), WebError> {
    for element in page.query_all(FORMS) {
        let form: HtmlFormElement = match element.dyn_into() {
            Ok(form) => form,
            Err(other) => {
                debug!(tag = %other.tag_name(), "Skipping non-form element");
                continue;
            },
        };

        let controls = query_all_in(&form, FORM_CONTROLS);
        let feedback = Rc::new(RefCell::new(FormFeedback::new(controls.len())));

        let submit_page = page.clone();
        let submitted = form.clone();
        let state = Rc::clone(&feedback);
        listen(&form, "submit", move |event| {
            event.prevent_default();
            if let Err(err) = on_submit(&submit_page, &submitted, &state) {
                warn!(%err, "Form validation failed");
            }
        })?;

        for (index, control) in controls.into_iter().enumerate() {
            let typed = control.clone();
            let state = Rc::clone(&feedback);
            listen(&control, "input", move |_| {
                if let FieldStatus::Flagged(error) = state.borrow_mut().on_input(index) {
                    trace!(index, %error, "Clearing field error");
                }
                if let Err(err) = clear_error(&typed) {
                    warn!(%err, "Failed to clear field error");
                }
            })?;
        }
    }

    Ok(())
}
