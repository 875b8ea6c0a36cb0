//! # Workflows
//!
//! User-action operations on [`crate::PopupCore`], grouped by concern.
//! Panels call these; nothing here touches the DOM beyond what the
//! surface trait offers.

mod editor;
mod onboarding;
mod tabs;
mod transitions;

pub use editor::EditorForm;
