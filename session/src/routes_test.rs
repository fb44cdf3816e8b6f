use super::*;

#[test]
fn route_paths_match_router_surface() {
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Register.path(), "/register");
    assert_eq!(Route::Onboarding.path(), "/onboarding");
    assert_eq!(Route::Dashboard.to_string(), "/dashboard");
}

#[test]
fn landing_depends_on_onboarding_state() {
    assert_eq!(Route::landing(true), Route::Dashboard);
    assert_eq!(Route::landing(false), Route::Onboarding);
}

#[test]
fn normalize_path_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/dashboard/"), "/dashboard");
    assert_eq!(normalize_path("/login?next=/x"), "/login");
    assert_eq!(normalize_path("/skills#top"), "/skills");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn public_set_is_login_and_register_only() {
    assert!(is_public("/login"));
    assert!(is_public("/register"));
    assert!(is_public("/login/"));
    assert!(is_public("/register?invite=1"));
    assert!(!is_public("/"));
    assert!(!is_public("/dashboard"));
    assert!(!is_public("/onboarding"));
}

#[test]
fn public_match_is_segment_aware() {
    assert!(!is_public("/login-help"));
    assert!(!is_public("/registered"));
    assert!(is_public("/login/reset"));
}

#[test]
fn onboarding_covers_nested_paths_only() {
    assert!(is_onboarding("/onboarding"));
    assert!(is_onboarding("/onboarding/step-2"));
    assert!(!is_onboarding("/onboardingx"));
    assert!(!is_onboarding("/dashboard"));
}
