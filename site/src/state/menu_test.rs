use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn dropdown_default_is_closed() {
    assert_eq!(DropdownState::default(), DropdownState::Closed);
    assert!(!DropdownState::default().wants_outside_listener());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn hover_opens_and_leave_closes() {
    let open = DropdownState::Closed.on(MenuEvent::PointerEnter);
    assert!(open.is_open());
    assert_eq!(open.on(MenuEvent::PointerLeave), DropdownState::Closed);
}

#[test]
fn outside_click_closes_open_menu() {
    assert_eq!(
        DropdownState::Open.on(MenuEvent::PointerDown { inside: false }),
        DropdownState::Closed
    );
}

#[test]
fn inside_click_keeps_menu_open() {
    assert_eq!(
        DropdownState::Open.on(MenuEvent::PointerDown { inside: true }),
        DropdownState::Open
    );
}

#[test]
fn clicks_never_open_a_closed_menu() {
    assert_eq!(
        DropdownState::Closed.on(MenuEvent::PointerDown { inside: true }),
        DropdownState::Closed
    );
    assert_eq!(
        DropdownState::Closed.on(MenuEvent::PointerDown { inside: false }),
        DropdownState::Closed
    );
}

#[test]
fn route_change_always_closes() {
    for state in [DropdownState::Open, DropdownState::Closed] {
        assert_eq!(state.on(MenuEvent::RouteChanged), DropdownState::Closed);
    }
}

#[test]
fn selecting_a_category_closes() {
    let mut state = DropdownState::Open;
    state.apply(MenuEvent::CategorySelected);
    assert_eq!(state, DropdownState::Closed);
}

#[test]
fn outside_listener_only_while_open() {
    let mut state = DropdownState::Closed;
    state.apply(MenuEvent::PointerEnter);
    assert!(state.wants_outside_listener());
    state.apply(MenuEvent::PointerDown { inside: false });
    assert!(!state.wants_outside_listener());
}
