use bitflags::bitflags;

bitflags! {
    /// Visual state of the mobile menu. The flags only ever move together.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MenuState: u8 {
        const TOGGLE_ACTIVE = 1 << 0;
        const NAV_OPEN = 1 << 1;
        const OVERLAY_VISIBLE = 1 << 2;
        const SCROLL_LOCKED = 1 << 3;

        const OPEN = Self::TOGGLE_ACTIVE.bits()
            | Self::NAV_OPEN.bits()
            | Self::OVERLAY_VISIBLE.bits()
            | Self::SCROLL_LOCKED.bits();
    }
}

impl MenuState {
    #[must_use]
    pub const fn closed() -> Self {
        Self::empty()
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.contains(Self::NAV_OPEN)
    }
}
