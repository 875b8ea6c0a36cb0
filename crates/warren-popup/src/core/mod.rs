//! # Core Controller Module
//!
//! This module contains the popup's central types:
//!
//! - [`PopupCore`]: the controller every panel handler calls into
//! - [`PopupConfig`]: process-wide configuration
//! - [`PopupError`]: popup-level error type

mod config;
mod controller;
mod error;

pub use config::{OnboardingVariant, PopupConfig};
pub use controller::PopupCore;
pub use error::PopupError;
