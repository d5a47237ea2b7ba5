use crate::dom::{Page, set_class, set_style};
use crate::error::WebError;
use crate::timing::listen_scroll;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{trace, warn};
use wayfarer_kernel::domain::constants::{MAIN_HEADER, REVEALED_CLASS, REVEAL_TARGETS};
use wayfarer_kernel::prelude::ScrollEffects;
use web_sys::{Element, HtmlElement};

#[derive(Debug)]
struct Effects {
    page: Page,
    header: Option<HtmlElement>,
    targets: Vec<Element>,
    state: RefCell<ScrollEffects>,
}

impl Effects {
    /// Viewport-relative tops of the elements not yet revealed.
    fn pending_tops(&self) -> Vec<(usize, f64)> {
        let pending: Vec<usize> = self.state.borrow().reveal().pending().collect();
        pending
            .into_iter()
            .filter_map(|i| self.targets.get(i).map(|el| (i, el.get_bounding_client_rect().top())))
            .collect()
    }

    fn reveal(&self, indices: &[usize]) -> Result<(), WebError> {
        for el in indices.iter().filter_map(|i| self.targets.get(*i)) {
            set_class(el, REVEALED_CLASS, true)?;
        }
        Ok(())
    }

    fn on_scroll(&self) -> Result<(), WebError> {
        let offset = self.page.scroll_offset();
        let height = self.page.viewport().height;
        let tops = self.pending_tops();

        let update = self.state.borrow_mut().on_scroll(offset, height, tops);

        if let (Some(header), Some(elevation)) = (&self.header, update.elevation) {
            trace!(offset, ?elevation, "Header elevation changed");
            set_style(header, "box-shadow", elevation.box_shadow())?;
        }
        self.reveal(&update.revealed)
    }

    fn initial_reveal(&self) -> Result<(), WebError> {
        let height = self.page.viewport().height;
        let tops = self.pending_tops();
        let revealed = self.state.borrow_mut().reveal_only(height, tops);
        self.reveal(&revealed)
    }
}

/// Header elevation and reveal-on-scroll.
///
/// # Errors
/// Returns [`WebError`] when the scroll listener cannot be attached.
pub fn init(page: &Page) -> Result<(), WebError> {
    let targets = page.query_all(REVEAL_TARGETS);
    let effects = Rc::new(Effects {
        page: page.clone(),
        header: page.query_html(MAIN_HEADER),
        state: RefCell::new(ScrollEffects::new(&page.config.scroll, targets.len())),
        targets,
    });

    effects.initial_reveal()?;

    let handler = Rc::clone(&effects);
    listen_scroll(page, move || {
        if let Err(err) = handler.on_scroll() {
            warn!(%err, "Scroll effects failed");
        }
    })
}
