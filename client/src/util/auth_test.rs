use super::*;

#[test]
fn should_redirect_unauth_when_loaded_without_token() {
    let state = AuthState::restored(None);
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_home(&state));
}

#[test]
fn should_redirect_home_when_token_exists() {
    let state = AuthState::restored(Some("jwt".to_owned()));
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_home(&state));
}
