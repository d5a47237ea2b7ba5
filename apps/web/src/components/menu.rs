use crate::dom::{Page, listen, set_class};
use crate::error::WebError;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wayfarer_kernel::domain::constants::{
    ACTIVE_CLASS, MAIN_NAV, MENU_TOGGLE, NAV_LINKS, OVERLAY_CLASS, SCROLL_LOCK,
};
use wayfarer_kernel::prelude::{MenuController, MenuState};
use web_sys::{Element, HtmlElement};

/// Elements whose state moves together with the menu.
#[derive(Debug)]
struct MenuDom {
    toggle: Element,
    nav: Option<Element>,
    overlay: HtmlElement,
    body: HtmlElement,
}

impl MenuDom {
    fn render(&self, state: MenuState) -> Result<(), WebError> {
        set_class(&self.toggle, ACTIVE_CLASS, state.contains(MenuState::TOGGLE_ACTIVE))?;
        if let Some(nav) = &self.nav {
            set_class(nav, ACTIVE_CLASS, state.contains(MenuState::NAV_OPEN))?;
        }
        set_class(&self.overlay, ACTIVE_CLASS, state.contains(MenuState::OVERLAY_VISIBLE))?;

        let style = self.body.style();
        if state.contains(MenuState::SCROLL_LOCKED) {
            style.set_property("overflow", SCROLL_LOCK)?;
        } else {
            style.remove_property("overflow")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Menu {
    dom: MenuDom,
    controller: RefCell<MenuController>,
}

impl Menu {
    fn toggle(&self) {
        let state = self.controller.borrow_mut().toggle();
        debug!(open = state.is_open(), "Menu toggled");
        self.show(state);
    }

    fn close(&self) {
        let state = self.controller.borrow_mut().close();
        self.show(state);
    }

    fn show(&self, state: MenuState) {
        if let Err(err) = self.dom.render(state) {
            warn!(%err, "Failed to render menu state");
        }
    }
}

/// Appends the menu overlay and wires the toggle, overlay and navigation links.
///
/// The overlay is always appended; without a toggle on the page no listener is wired.
///
/// # Errors
/// Returns [`WebError`] when the overlay cannot be created or a listener cannot be attached.
pub fn init(page: &Page) -> Result<(), WebError> {
    let body = page.body()?;
    let overlay = page.create("div", OVERLAY_CLASS)?;
    body.append_child(&overlay)?;

    let Some(toggle) = page.query(MENU_TOGGLE) else {
        debug!("No mobile menu toggle on this page");
        return Ok(());
    };

    let menu = Rc::new(Menu {
        dom: MenuDom { toggle: toggle.clone(), nav: page.query(MAIN_NAV), overlay: overlay.clone(), body },
        controller: RefCell::new(MenuController::new()),
    });

    let on_toggle = Rc::clone(&menu);
    listen(&toggle, "click", move |_| on_toggle.toggle())?;

    let on_overlay = Rc::clone(&menu);
    listen(&overlay, "click", move |_| on_overlay.close())?;

    for link in page.query_all(NAV_LINKS) {
        let on_link = Rc::clone(&menu);
        listen(&link, "click", move |_| on_link.close())?;
    }

    Ok(())
}
