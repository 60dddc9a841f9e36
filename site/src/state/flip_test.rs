use super::*;

#[test]
fn flip_state_default_is_front() {
    let state = FlipState::default();
    assert_eq!(state.side(), FlipSide::Front);
    assert!(!state.is_flipped());
    assert_eq!(state.pending_return(), None);
}

#[test]
fn show_back_then_front() {
    let mut state = FlipState::default();
    state.show_back();
    assert_eq!(state.side(), FlipSide::Back);
    state.show_front();
    assert_eq!(state.side(), FlipSide::Front);
}

#[test]
fn back_side_has_pending_return() {
    let mut state = FlipState::default();
    state.show_back();
    assert!(state.pending_return().is_some());
}

#[test]
fn auto_return_flips_to_front_without_manual_return() {
    let mut state = FlipState::default();
    state.show_back();
    let token = state.pending_return().expect("token while flipped");
    assert!(state.auto_return(token));
    assert_eq!(state.side(), FlipSide::Front);
}

#[test]
fn manual_return_cancels_pending_auto_return() {
    let mut state = FlipState::default();
    state.show_back();
    let token = state.pending_return().expect("token while flipped");
    state.show_front();
    assert!(!state.auto_return(token));
    assert_eq!(state.side(), FlipSide::Front);
}

#[test]
fn stale_token_does_not_flip_a_later_stay_on_back() {
    let mut state = FlipState::default();
    state.show_back();
    let stale = state.pending_return().expect("first stay");
    state.show_front();
    state.show_back();

    assert!(!state.auto_return(stale));
    assert_eq!(state.side(), FlipSide::Back);

    let current = state.pending_return().expect("second stay");
    assert_ne!(stale, current);
    assert!(state.auto_return(current));
    assert_eq!(state.side(), FlipSide::Front);
}

#[test]
fn show_back_twice_keeps_the_same_deadline() {
    let mut state = FlipState::default();
    state.show_back();
    let token = state.pending_return();
    state.show_back();
    assert_eq!(state.pending_return(), token);
}

#[test]
fn show_front_on_front_is_noop() {
    let mut state = FlipState::default();
    state.show_front();
    assert_eq!(state, FlipState::default());
}

#[test]
fn auto_return_delay_is_thirty_seconds() {
    assert_eq!(AUTO_RETURN_MS, 30_000);
}
