//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `toast` are process-wide and provided through Leptos context.
//! `screen` and `navigation` are owned by the page that mounts them.

pub mod auth;
pub mod navigation;
pub mod screen;
pub mod toast;
