//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, toasts)
//! and delegates rendering details to `components`. Entity routes share the
//! generic `resource_screen`.

pub mod dashboard;
pub mod entities;
pub mod login;
pub mod navigation;
pub mod resource_screen;
