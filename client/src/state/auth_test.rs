use super::*;

#[test]
fn default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_from_token() {
    let state = AuthState::restored(Some("jwt".to_owned()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.bearer(), Some("jwt"));
}

#[test]
fn restored_ignores_empty_token() {
    let state = AuthState::restored(Some(String::new()));
    assert!(!state.is_authenticated());
    let state = AuthState::restored(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn login_then_logout() {
    let mut state = AuthState::default();
    state.login("jwt".to_owned(), Some(serde_json::json!({"name": "admin"})));
    assert!(state.is_authenticated());
    assert!(state.user.is_some());

    state.logout();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
    assert_eq!(state.bearer(), None);
}
