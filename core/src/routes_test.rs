use super::*;

#[test]
fn parse_recognizes_every_route() {
    assert_eq!(Route::parse("/"), Some(Route::Root));
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/register"), Some(Route::Register));
    assert_eq!(Route::parse("/dashboard"), Some(Route::Dashboard));
    assert_eq!(Route::parse("/applications"), Some(Route::Applications));
    assert_eq!(Route::parse("/applications/new"), Some(Route::NewApplication));
    assert_eq!(Route::parse("/applications/42/edit"), Some(Route::EditApplication(42)));
}

#[test]
fn parse_ignores_query_and_trailing_slash() {
    assert_eq!(Route::parse("/dashboard/?tab=1"), Some(Route::Dashboard));
    assert_eq!(Route::parse("/applications#top"), Some(Route::Applications));
}

#[test]
fn parse_rejects_unknown_paths() {
    assert_eq!(Route::parse("/applications/abc/edit"), None);
    assert_eq!(Route::parse("/settings"), None);
}

#[test]
fn path_and_parse_agree() {
    for route in [
        Route::Root,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Applications,
        Route::NewApplication,
        Route::EditApplication(9),
    ] {
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

#[test]
fn only_app_pages_are_protected() {
    assert!(Route::Dashboard.is_protected());
    assert!(Route::EditApplication(1).is_protected());
    assert!(!Route::Login.is_protected());
    assert!(!Route::Register.is_protected());
    assert!(!Route::Root.is_protected());
}
