//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control lives in `AuthGuard`, not in the pages.

pub(crate) mod auth_form;
pub mod dashboard;
pub mod login;
pub mod onboarding;
pub mod register;
pub mod section;
