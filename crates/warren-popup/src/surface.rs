//! DOM boundary
//!
//! The popup core never touches the DOM. Panels build typed view state
//! ([`crate::views::PanelView`]) and the controller drives visibility;
//! everything else is the frontend's concern behind this trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::views::PanelView;

/// Static DOM selector of a panel root or control cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Selector(pub &'static str);

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering and visibility surface implemented by the frontend
///
/// All operations are fire-and-forget from the core's point of view:
/// the DOM cannot meaningfully reject a show/hide, and rendering errors
/// are the frontend's problem to report.
pub trait PopupSurface: Send + Sync {
    /// Reveal the subtree under `selector`
    fn show(&self, selector: Selector);

    /// Hide the subtree under `selector`
    fn hide(&self, selector: Selector);

    /// Whether the subtree under `selector` is currently visible
    fn is_visible(&self, selector: Selector) -> bool;

    /// Hand a fully built panel view to the renderer
    ///
    /// Called from `prepare`, always before the panel's root is shown,
    /// so the hide/show swap never exposes a half-built panel.
    fn present(&self, view: &PanelView);

    /// Focus an input on the next animation frame
    ///
    /// Deferred because focus only takes once the element is visible.
    fn focus_soon(&self, selector: Selector);

    /// Close the popup window
    fn close_popup(&self);
}
