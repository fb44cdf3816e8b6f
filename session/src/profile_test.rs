use super::*;
use crate::store::MemoryStore;
use std::sync::Mutex;

fn alex() -> UserProfile {
    UserProfile {
        id: Some(7),
        email: Some("alex@school.edu".to_owned()),
        name: Some("Alex".to_owned()),
        coding_skill_level: Some("beginner".to_owned()),
        graduation_date: Some("2027-05".to_owned()),
        onboarding_completed: false,
    }
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn profile_deserializes_with_missing_fields() {
    let user: UserProfile = serde_json::from_str(r#"{"name":"Alex"}"#).expect("profile");
    assert_eq!(user.name.as_deref(), Some("Alex"));
    assert_eq!(user.coding_skill_level, None);
    assert!(!user.onboarding_completed);
}

#[test]
fn profile_accepts_null_fields_from_server() {
    let raw = r#"{"name":null,"coding_skill_level":null,"graduation_date":null,"onboarding_completed":true}"#;
    let user: UserProfile = serde_json::from_str(raw).expect("profile");
    assert_eq!(user.name, None);
    assert!(user.onboarding_completed);
}

#[test]
fn display_name_falls_back_to_email_then_label() {
    let mut user = alex();
    assert_eq!(user.display_name(), "Alex");
    user.name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "alex@school.edu");
    user.email = None;
    assert_eq!(user.display_name(), "Student");
}

// =============================================================
// SkillLevel
// =============================================================

#[test]
fn skill_level_parses_case_insensitively() {
    assert_eq!("beginner".parse::<SkillLevel>(), Ok(SkillLevel::Beginner));
    assert_eq!(" Intermediate ".parse::<SkillLevel>(), Ok(SkillLevel::Intermediate));
    assert_eq!("ADVANCED".parse::<SkillLevel>(), Ok(SkillLevel::Advanced));
    assert!("expert".parse::<SkillLevel>().is_err());
}

#[test]
fn skill_level_displays_capitalized() {
    assert_eq!(SkillLevel::Intermediate.to_string(), "Intermediate");
    assert_eq!(SkillLevel::default(), SkillLevel::Beginner);
}

// =============================================================
// ProfileCache
// =============================================================

#[test]
fn cache_round_trips_snapshot() {
    let cache = ProfileCache::new(MemoryStore::new());
    cache.set_user(&alex());
    assert_eq!(cache.get_user(), Some(alex()));
}

#[test]
fn cache_reads_absent_when_empty() {
    let cache = ProfileCache::new(MemoryStore::new());
    assert_eq!(cache.get_user(), None);
}

#[test]
fn malformed_cached_text_reads_as_absent() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "{not json");
    let cache = ProfileCache::new(store.clone());
    assert_eq!(cache.get_user(), None);
    // The corrupt value is left in place; only a later write replaces it.
    assert_eq!(store.get(USER_KEY).as_deref(), Some("{not json"));
}

#[test]
fn cached_json_of_wrong_type_reads_as_absent() {
    let store = MemoryStore::new();
    store.set(USER_KEY, "[1,2,3]");
    let cache = ProfileCache::new(store);
    assert_eq!(cache.get_user(), None);
}

#[test]
fn clear_user_removes_snapshot() {
    let store = MemoryStore::new();
    let cache = ProfileCache::new(store.clone());
    cache.set_user(&alex());
    cache.clear_user();
    assert_eq!(cache.get_user(), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn listener_sees_every_write() {
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let sink = seen.clone();
    let cache = ProfileCache::new(MemoryStore::new()).with_listener(Arc::new(move |user| {
        sink.lock()
            .expect("lock")
            .push(user.and_then(|u| u.name.clone()));
    }));

    cache.set_user(&alex());
    cache.clear_user();

    let seen = seen.lock().expect("lock");
    assert_eq!(*seen, vec![Some("Alex".to_owned()), None]);
}
