//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and form controls while reading/writing
//! shared state from Leptos context providers or the screen signal they are
//! handed.

pub mod data_table;
pub mod field_input;
pub mod layout;
pub mod modal;
pub mod sidebar;
pub mod toast_stack;
