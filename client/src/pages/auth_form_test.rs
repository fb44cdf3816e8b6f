use super::*;

#[test]
fn submit_label_tracks_busy_state() {
    assert_eq!(AuthMode::Login.submit_label(false), "Sign in");
    assert_eq!(AuthMode::Login.submit_label(true), "Signing in...");
    assert_eq!(AuthMode::Register.submit_label(false), "Create account");
    assert_eq!(AuthMode::Register.submit_label(true), "Creating account...");
}

#[test]
fn switch_link_points_at_the_other_public_route() {
    let (_, _, login_href) = AuthMode::Register.switch_link();
    let (_, _, register_href) = AuthMode::Login.switch_link();
    assert_eq!(login_href, "/login");
    assert_eq!(register_href, "/register");
    assert!(session::routes::is_public(login_href));
    assert!(session::routes::is_public(register_href));
}

#[test]
fn copy_differs_between_modes() {
    assert_ne!(AuthMode::Login.title(), AuthMode::Register.title());
    assert_ne!(AuthMode::Login.subtitle(), AuthMode::Register.subtitle());
}
