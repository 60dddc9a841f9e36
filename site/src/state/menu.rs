//! Open/closed state of the header's project-category dropdown.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Pointer entered the trigger region.
    PointerEnter,
    /// Pointer left the trigger region.
    PointerLeave,
    /// A mousedown anywhere in the document; `inside` is whether it landed
    /// within the dropdown's bounding element.
    PointerDown { inside: bool },
    /// A category entry was chosen.
    CategorySelected,
    /// The router moved to another path or fragment.
    RouteChanged,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Next state after `event`.
    #[must_use]
    pub fn on(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::PointerEnter => Self::Open,
            MenuEvent::PointerDown { inside: true } => self,
            MenuEvent::PointerLeave
            | MenuEvent::PointerDown { inside: false }
            | MenuEvent::CategorySelected
            | MenuEvent::RouteChanged => Self::Closed,
        }
    }

    /// Apply `event` in place.
    pub fn apply(&mut self, event: MenuEvent) {
        *self = self.on(event);
    }

    /// Whether a document-level outside-click observer should be registered.
    pub fn wants_outside_listener(self) -> bool {
        self.is_open()
    }
}
