//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and static briefing content while reading
//! shared state from Leptos context providers.

pub mod about_line_tab;
pub mod theme_toggle;
