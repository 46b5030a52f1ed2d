//! Mobile menu open/closed state.

/// State shared by the toggle button (`active`) and the panel (`open`).
/// Both markers always mirror this one flag, so they cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known state, e.g. the markup's initial classes.
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button clicked. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the panel was clicked. Always closes.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::new();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(menu.toggle());
    }

    #[test]
    fn link_click_resets_regardless_of_state() {
        let mut menu = MenuState::new();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        assert!(menu.toggle());
    }

    #[test]
    fn toggle_from_initially_open() {
        let mut menu = MenuState::with_open(true);
        assert!(!menu.toggle());
    }
}
