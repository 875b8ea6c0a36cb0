//! Panel identity, lifecycle contract, registry, and navigation state
//!
//! Panels are a closed set: [`Panel`] enumerates every logical panel the
//! popup can show, so navigating to an unknown panel is a compile-time
//! impossibility. Resolving a variant that was never given a handler is
//! still a loud error, since it means startup wiring is broken.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{PopupCore, PopupError};
use crate::surface::Selector;
use warren_core::{Identity, TransitionEditMode};

/// The closed set of logical panels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Panel {
    /// Onboarding step 1 (stage 0)
    Onboarding1,
    /// Onboarding step 2 (stage 1)
    Onboarding2,
    /// Onboarding step 3 (stage 2)
    Onboarding3,
    /// Onboarding step 4 (stage 3)
    Onboarding4,
    /// Onboarding step 5 (stage 4)
    Onboarding5,
    /// Container list (the home panel)
    ContainersList,
    /// Container create/update form
    ContainerEdit,
    /// Container deletion confirm
    ContainerDelete,
    /// Transition-rule summary and editor
    Transitions,
    /// Generic "pick transition target" panel
    TransitionPicker,
    /// Achievement display
    Achievements,
}

impl Panel {
    /// Every panel, in registration order
    pub const ALL: [Panel; 11] = [
        Panel::Onboarding1,
        Panel::Onboarding2,
        Panel::Onboarding3,
        Panel::Onboarding4,
        Panel::Onboarding5,
        Panel::ContainersList,
        Panel::ContainerEdit,
        Panel::ContainerDelete,
        Panel::Transitions,
        Panel::TransitionPicker,
        Panel::Achievements,
    ];
}

/// Context value attached to the current panel
///
/// Carried across transitions so that going back resumes the caller's
/// state. The `Pick` variant is the explicit continuation the picker
/// panel returns through: it names the identity a target is being picked
/// for and the edit mode to resume in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelContext {
    /// No context
    None,
    /// The identity the panel was opened for
    Identity(Identity),
    /// Transition-target pick in progress
    Pick {
        /// Source identity the rule applies to
        source: Identity,
        /// Edit mode to restore when the picker returns
        resume: TransitionEditMode,
    },
}

/// Lifecycle contract of one registered panel
///
/// `initialize` runs once at registration (static wiring);
/// `prepare` runs every time the panel becomes visible and must be
/// idempotent — it rebuilds dynamic content from current state;
/// `unregister` runs once per hide transition, for teardown of listeners
/// that must not persist while the panel is hidden.
#[async_trait]
pub trait PanelHandler: Send + Sync {
    /// Which panel this handler serves
    fn panel(&self) -> Panel;

    /// DOM selector of the panel root
    fn selector(&self) -> Selector;

    /// Alternate selector used under a recognized onboarding variation
    fn variant_selector(&self) -> Option<Selector> {
        None
    }

    /// One-time setup at registration
    async fn initialize(&self, core: &PopupCore) -> Result<(), PopupError> {
        let _ = core;
        Ok(())
    }

    /// Rebuild the panel's content from current state
    async fn prepare(&self, core: &PopupCore) -> Result<(), PopupError>;

    /// Teardown when the panel is hidden
    async fn unregister(&self, core: &PopupCore) -> Result<(), PopupError> {
        let _ = core;
        Ok(())
    }
}

/// Mapping from panel to handler, built once at startup
#[derive(Default)]
pub struct PanelRegistry {
    handlers: BTreeMap<Panel, Arc<dyn PanelHandler>>,
}

impl PanelRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a handler with its panel
    ///
    /// Registering the same panel twice is an error: `initialize` must
    /// not run twice for one panel.
    pub fn insert(&mut self, handler: Arc<dyn PanelHandler>) -> Result<(), PopupError> {
        let panel = handler.panel();
        if self.handlers.contains_key(&panel) {
            return Err(PopupError::AlreadyRegistered(panel));
        }
        self.handlers.insert(panel, handler);
        Ok(())
    }

    /// Resolve the handler for a panel, failing loudly if absent
    pub fn resolve(&self, panel: Panel) -> Result<Arc<dyn PanelHandler>, PopupError> {
        self.handlers
            .get(&panel)
            .cloned()
            .ok_or(PopupError::PanelNotRegistered(panel))
    }

    /// All registered handlers, in stable panel order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn PanelHandler>> {
        self.handlers.values()
    }
}

/// Process-wide navigation state: current panel, one-level history,
/// and the context attached to the current panel
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Option<(Panel, PanelContext)>,
    previous: Option<(Panel, PanelContext)>,
}

impl NavigationState {
    /// State before any navigation
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward navigation
    ///
    /// The outgoing panel (and the context it was opened with) becomes
    /// the one-level history entry.
    pub fn record(&mut self, panel: Panel, context: PanelContext) {
        self.previous = self.current.take();
        self.current = Some((panel, context));
    }

    /// The currently visible panel, if navigation has started
    pub fn current(&self) -> Option<Panel> {
        self.current.as_ref().map(|(panel, _)| *panel)
    }

    /// Context attached to the current panel
    pub fn context(&self) -> Option<&PanelContext> {
        self.current.as_ref().map(|(_, context)| context)
    }

    /// The panel shown immediately before the current one, with the
    /// context it was opened with
    pub fn previous(&self) -> Option<&(Panel, PanelContext)> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_navigation_has_no_previous() {
        let mut nav = NavigationState::new();
        nav.record(Panel::ContainersList, PanelContext::None);
        assert_eq!(nav.current(), Some(Panel::ContainersList));
        assert!(nav.previous().is_none());
    }

    #[test]
    fn test_previous_is_single_level() {
        let mut nav = NavigationState::new();
        nav.record(Panel::ContainersList, PanelContext::None);
        nav.record(Panel::ContainerEdit, PanelContext::None);
        nav.record(Panel::ContainerDelete, PanelContext::None);
        // Only the immediately preceding panel is retained.
        let (panel, _) = nav.previous().cloned().unwrap();
        assert_eq!(panel, Panel::ContainerEdit);
    }

    #[test]
    fn test_previous_keeps_outgoing_context() {
        let mut nav = NavigationState::new();
        let identity = Identity::default_container();
        nav.record(
            Panel::ContainerEdit,
            PanelContext::Identity(identity.clone()),
        );
        nav.record(Panel::ContainerDelete, PanelContext::None);
        let (panel, context) = nav.previous().cloned().unwrap();
        assert_eq!(panel, Panel::ContainerEdit);
        assert_eq!(context, PanelContext::Identity(identity));
    }
}
