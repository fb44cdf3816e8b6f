use super::*;

fn user(skill: Option<&str>, grad: Option<&str>) -> UserProfile {
    UserProfile {
        name: Some("Alex".to_owned()),
        coding_skill_level: skill.map(str::to_owned),
        graduation_date: grad.map(str::to_owned),
        ..UserProfile::default()
    }
}

// =============================================================
// profile_label
// =============================================================

#[test]
fn profile_label_without_profile_reads_signed_out() {
    assert_eq!(profile_label(None), "Signed out");
}

#[test]
fn profile_label_uses_display_name() {
    assert_eq!(profile_label(Some(&user(None, None))), "Alex");
}

// =============================================================
// profile_subtitle
// =============================================================

#[test]
fn profile_subtitle_combines_skill_and_year() {
    let u = user(Some("beginner"), Some("2027-05"));
    assert_eq!(profile_subtitle(Some(&u)), "beginner · Class of 2027");
}

#[test]
fn profile_subtitle_handles_partial_profiles() {
    assert_eq!(profile_subtitle(Some(&user(Some("Advanced"), None))), "Advanced");
    assert_eq!(profile_subtitle(Some(&user(None, Some("2026-12-01")))), "Class of 2026");
    assert_eq!(profile_subtitle(Some(&user(Some(""), None))), "");
    assert_eq!(profile_subtitle(None), "");
}
