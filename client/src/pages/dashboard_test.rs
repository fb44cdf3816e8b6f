use super::*;

fn user(name: Option<&str>, level: Option<&str>) -> UserProfile {
    UserProfile {
        id: Some(1),
        email: Some("alex@school.edu".to_owned()),
        name: name.map(str::to_owned),
        coding_skill_level: level.map(str::to_owned),
        graduation_date: None,
        onboarding_completed: true,
    }
}

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(Some(&user(Some("Alex"), None))), "Welcome back, Alex");
}

#[test]
fn greeting_falls_back_to_email() {
    assert_eq!(greeting(Some(&user(None, None))), "Welcome back, alex@school.edu");
}

#[test]
fn greeting_without_profile() {
    assert_eq!(greeting(None), "Welcome back");
}

#[test]
fn plan_summary_follows_skill_level() {
    assert_eq!(plan_summary(Some(&user(None, Some("advanced")))), "Focus on applications and interview prep.");
    assert_eq!(plan_summary(Some(&user(None, Some("intermediate")))), "Build projects and keep up daily practice.");
    assert_eq!(plan_summary(None), "Start with the fundamentals and a first project.");
}

#[test]
fn plan_summary_reads_onboarding_labels() {
    assert_eq!(
        plan_summary(Some(&user(Some("Alex"), Some(SkillLevel::Advanced.as_str())))),
        "Focus on applications and interview prep."
    );
    assert_eq!(
        plan_summary(Some(&user(Some("Alex"), Some(SkillLevel::Intermediate.as_str())))),
        "Build projects and keep up daily practice."
    );
    assert_eq!(
        plan_summary(Some(&user(Some("Alex"), Some(SkillLevel::Beginner.as_str())))),
        "Start with the fundamentals and a first project."
    );
}

#[test]
fn plan_summary_falls_back_for_unknown_levels() {
    assert_eq!(plan_summary(Some(&user(None, Some("wizard")))), "Start with the fundamentals and a first project.");
}
