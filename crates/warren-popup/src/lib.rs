//! # Warren Popup Core
//!
//! The headless popup application core: a stack of mutually-exclusive
//! panels (onboarding, container list, container editor, deletion
//! confirm, transition routing, achievements) driven by a single
//! controller, [`PopupCore`].
//!
//! The controller owns:
//!
//! - the panel registry and the single-active-panel navigation state
//!   machine with one-level history and an attached context value,
//! - the identity directory (a read-mostly snapshot of the Host's
//!   container set),
//! - the onboarding-stage progression, and
//! - the transition-rule edit-mode protocol.
//!
//! Rendering and the browser itself stay outside: panels build typed
//! view state and hand it to a [`PopupSurface`], and all tab/container
//! mutations go through `warren_core::HostEffects`.

pub mod core;
pub mod directory;
pub mod navigation;
pub mod panels;
pub mod surface;
pub mod views;
pub mod workflows;

pub use crate::core::{OnboardingVariant, PopupConfig, PopupCore, PopupError};
pub use directory::IdentityDirectory;
pub use navigation::{NavigationState, Panel, PanelContext, PanelHandler, PanelRegistry};
pub use surface::{PopupSurface, Selector};
pub use views::PanelView;
pub use workflows::EditorForm;
