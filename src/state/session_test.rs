use super::*;

#[test]
fn default_has_no_user() {
    assert_eq!(SessionState::default().username(), None);
}

#[test]
fn set_username_overwrites_previous() {
    let mut state = SessionState::default();
    state.set_username("alice");
    state.set_username("bob");
    assert_eq!(state.username(), Some("bob"));
}

#[test]
fn clear_drops_username() {
    let mut state = SessionState { username: Some("alice".to_owned()) };
    state.clear();
    assert_eq!(state, SessionState::default());
}

#[test]
fn signal_sink_updates_shared_state() {
    let owner = Owner::new();
    owner.with(|| {
        let session = RwSignal::new(SessionState::default());
        SessionSink::set_username(&session, "dana");
        assert_eq!(session.get_untracked().username(), Some("dana"));
    });
}
