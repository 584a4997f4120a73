use super::*;

#[test]
fn find_cookie_among_several() {
    let header = "theme=dark; token=abc.def.ghi; other=1";
    assert_eq!(find_cookie(header, "token").as_deref(), Some("abc.def.ghi"));
    assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
}

#[test]
fn find_cookie_missing_or_empty() {
    assert_eq!(find_cookie("", "token"), None);
    assert_eq!(find_cookie("token=", "token"), None);
    assert_eq!(find_cookie("tokenx=1", "token"), None);
}

#[test]
fn find_cookie_keeps_equals_in_value() {
    assert_eq!(find_cookie("token=a=b", "token").as_deref(), Some("a=b"));
}

#[test]
fn cookie_strings() {
    assert_eq!(set_cookie_string("token", "jwt"), "token=jwt; path=/; SameSite=Lax");
    assert!(expire_cookie_string("token").starts_with("token=; path=/; expires=Thu, 01 Jan 1970"));
}

#[test]
fn read_token_is_none_off_browser() {
    assert_eq!(read_token(), None);
}
