//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_guard` sits between the router and every page; `sidebar` is the
//! chrome shared by signed-in pages.

pub mod auth_guard;
pub mod sidebar;
