use wayfarer_domain::menu::MenuState;

/// Mobile menu state machine.
///
/// The toggle, navigation panel, overlay and body scroll lock always share one
/// state: either everything is open or everything is closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuController {
    open: bool,
}

impl MenuController {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Flips the menu and returns the state to render.
    pub const fn toggle(&mut self) -> MenuState {
        self.open = !self.open;
        self.state()
    }

    /// Forces the menu closed (overlay click, nav link click).
    pub const fn close(&mut self) -> MenuState {
        self.open = false;
        self.state()
    }

    #[must_use]
    pub const fn state(&self) -> MenuState {
        if self.open { MenuState::OPEN } else { MenuState::closed() }
    }
}
