use super::*;

#[test]
fn new_state_records_initial_offset() {
    let state = HeaderState::new(250.0);
    assert!((state.last_y - 250.0).abs() < f64::EPSILON);
    assert!(state.past_threshold);
    assert!(!state.scrolling_up);
    assert!(!HeaderState::new(0.0).past_threshold);
}

#[test]
fn scrolling_down_never_reveals() {
    let mut state = HeaderState::new(0.0);
    assert!(state.sample(50.0).is_none());
    assert!(state.sample(400.0).is_none());
    assert!(!state.scrolling_up);
    assert!(state.past_threshold);
}

#[test]
fn scrolling_up_past_threshold_reveals_and_issues_ticket() {
    let mut state = HeaderState::new(500.0);
    let ticket = state.sample(300.0);
    assert!(ticket.is_some());
    assert!(state.scrolling_up);
    assert!(state.past_threshold);
}

#[test]
fn scrolling_up_below_threshold_clears_immediately() {
    let mut state = HeaderState::new(500.0);
    state.sample(300.0);
    assert!(state.sample(60.0).is_none());
    assert!(!state.scrolling_up);
    assert!(!state.past_threshold);
}

#[test]
fn threshold_is_inclusive() {
    let mut state = HeaderState::new(200.0);
    assert!(state.sample(100.0).is_some());
    assert!(state.past_threshold);
}

#[test]
fn only_latest_ticket_clears_state() {
    let mut state = HeaderState::new(900.0);
    let first = state.sample(800.0).unwrap_or_default();
    let second = state.sample(700.0).unwrap_or_default();
    assert_ne!(first, second);

    assert!(!state.expire(first));
    assert!(state.scrolling_up);
    assert!(state.expire(second));
    assert!(!state.scrolling_up);
}

#[test]
fn expire_after_downward_scroll_is_noop() {
    let mut state = HeaderState::new(900.0);
    let ticket = state.sample(800.0).unwrap_or_default();
    state.sample(850.0);
    assert!(!state.expire(ticket));
}

#[test]
fn last_y_tracks_every_sample() {
    let mut state = HeaderState::new(0.0);
    for y in [10.0, 300.0, 120.0, 5.0] {
        state.sample(y);
        assert!((state.last_y - y).abs() < f64::EPSILON);
    }
}
