//! Recording DOM surface
//!
//! Tracks visibility per selector and records every operation in order,
//! so tests can assert the prepare-before-reveal-before-teardown
//! sequencing of navigation.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use warren_popup::{Panel, PanelView, PopupSurface, Selector};

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A subtree was revealed
    Shown(Selector),
    /// A subtree was hidden
    Hidden(Selector),
    /// A panel view was handed to the renderer
    Presented(Panel),
    /// Focus was requested for the next frame
    FocusRequested(Selector),
    /// The popup was closed
    Closed,
}

#[derive(Debug, Default)]
struct SurfaceState {
    events: Vec<SurfaceEvent>,
    visible: BTreeSet<&'static str>,
    views: Vec<PanelView>,
    closed: bool,
}

/// Recording [`PopupSurface`] implementation
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    /// Fresh surface with nothing visible
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().expect("surface state poisoned")
    }

    /// All recorded operations, in order
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.lock().events.clone()
    }

    /// Selectors currently visible
    pub fn visible(&self) -> BTreeSet<&'static str> {
        self.lock().visible.clone()
    }

    /// Every presented view, in order
    pub fn views(&self) -> Vec<PanelView> {
        self.lock().views.clone()
    }

    /// The most recently presented view
    pub fn last_view(&self) -> Option<PanelView> {
        self.lock().views.last().cloned()
    }

    /// Whether the popup was closed
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Position of the first occurrence of an event, if recorded
    pub fn position_of(&self, event: &SurfaceEvent) -> Option<usize> {
        self.lock().events.iter().position(|e| e == event)
    }
}

impl PopupSurface for RecordingSurface {
    fn show(&self, selector: Selector) {
        let mut state = self.lock();
        state.visible.insert(selector.0);
        state.events.push(SurfaceEvent::Shown(selector));
    }

    fn hide(&self, selector: Selector) {
        let mut state = self.lock();
        state.visible.remove(selector.0);
        state.events.push(SurfaceEvent::Hidden(selector));
    }

    fn is_visible(&self, selector: Selector) -> bool {
        self.lock().visible.contains(selector.0)
    }

    fn present(&self, view: &PanelView) {
        let mut state = self.lock();
        state.events.push(SurfaceEvent::Presented(view.panel()));
        state.views.push(view.clone());
    }

    fn focus_soon(&self, selector: Selector) {
        self.lock().events.push(SurfaceEvent::FocusRequested(selector));
    }

    fn close_popup(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.events.push(SurfaceEvent::Closed);
    }
}
