//! The popup controller
//!
//! [`PopupCore`] is the single object every panel handler calls into: it
//! owns the panel registry, the navigation state machine, the identity
//! directory snapshot, and the transition-edit state. It is an explicit
//! application-context value (not ambient global state) so a single
//! panel can be exercised in tests without booting a browser.

use async_lock::RwLock;
use std::sync::Arc;

use crate::core::{PopupConfig, PopupError};
use crate::directory::IdentityDirectory;
use crate::navigation::{NavigationState, Panel, PanelContext, PanelHandler, PanelRegistry};
use crate::panels;
use crate::surface::{PopupSurface, Selector};
use warren_core::{HostEffects, Identity, PrefsEffects, TransitionEditMode};

use super::OnboardingVariant;

/// The popup's central controller
pub struct PopupCore {
    config: PopupConfig,
    host: Arc<dyn HostEffects>,
    prefs: Arc<dyn PrefsEffects>,
    surface: Arc<dyn PopupSurface>,
    registry: PanelRegistry,
    nav: RwLock<NavigationState>,
    directory: RwLock<IdentityDirectory>,
    edit_mode: RwLock<Option<TransitionEditMode>>,
}

impl PopupCore {
    /// Controller with an empty panel registry
    pub fn new(
        config: PopupConfig,
        host: Arc<dyn HostEffects>,
        prefs: Arc<dyn PrefsEffects>,
        surface: Arc<dyn PopupSurface>,
    ) -> Self {
        Self {
            config,
            host,
            prefs,
            surface,
            registry: PanelRegistry::new(),
            nav: RwLock::new(NavigationState::new()),
            directory: RwLock::new(IdentityDirectory::new()),
            edit_mode: RwLock::new(None),
        }
    }

    /// Controller with the full standard panel set registered
    pub async fn with_default_panels(
        config: PopupConfig,
        host: Arc<dyn HostEffects>,
        prefs: Arc<dyn PrefsEffects>,
        surface: Arc<dyn PopupSurface>,
    ) -> Result<Self, PopupError> {
        let mut core = Self::new(config, host, prefs, surface);
        for handler in panels::default_panels() {
            core.register_panel(handler).await?;
        }
        Ok(core)
    }

    /// Register a panel handler and run its one-time `initialize`
    pub async fn register_panel(
        &mut self,
        handler: Arc<dyn PanelHandler>,
    ) -> Result<(), PopupError> {
        self.registry.insert(handler.clone())?;
        handler.initialize(self).await
    }

    /// Popup configuration
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// The Host boundary
    pub fn host(&self) -> &Arc<dyn HostEffects> {
        &self.host
    }

    /// The preference-storage boundary
    pub fn prefs(&self) -> &Arc<dyn PrefsEffects> {
        &self.prefs
    }

    /// The DOM boundary
    pub fn surface(&self) -> &Arc<dyn PopupSurface> {
        &self.surface
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Show a panel, carrying `context` across the transition
    ///
    /// The target's `prepare` always completes before anything becomes
    /// visible; the previously visible panel is hidden (and its
    /// `unregister` run) only after the new content is ready, so the
    /// swap never exposes a half-built panel.
    pub async fn navigate(&self, panel: Panel, context: PanelContext) -> Result<(), PopupError> {
        let handler = self.registry.resolve(panel)?;
        {
            let mut nav = self.nav.write().await;
            nav.record(panel, context);
        }
        tracing::debug!(?panel, "navigating");
        handler.prepare(self).await?;

        for other in self.registry.iter() {
            if other.panel() == panel {
                continue;
            }
            let selector = self.selector_for(other.as_ref());
            if self.surface.is_visible(selector) {
                self.surface.hide(selector);
                other.unregister(self).await?;
            }
        }
        self.surface.show(self.selector_for(handler.as_ref()));
        Ok(())
    }

    /// Return to the previously shown panel with the context it was
    /// opened with
    pub async fn navigate_back(&self) -> Result<(), PopupError> {
        let (panel, context) = {
            let nav = self.nav.read().await;
            nav.previous().cloned().ok_or(PopupError::NoPreviousPanel)?
        };
        self.navigate(panel, context).await
    }

    /// The currently visible panel, if navigation has started
    pub async fn current_panel(&self) -> Option<Panel> {
        self.nav.read().await.current()
    }

    /// Context attached to the current panel
    pub async fn current_context(&self) -> PanelContext {
        self.nav
            .read()
            .await
            .context()
            .cloned()
            .unwrap_or(PanelContext::None)
    }

    /// The identity the current panel was opened for
    ///
    /// Failing here means a panel that requires an identity context was
    /// reached without one, which is a core bug.
    pub async fn current_identity(&self) -> Result<Identity, PopupError> {
        match self.nav.read().await.context() {
            Some(PanelContext::Identity(identity)) => Ok(identity.clone()),
            Some(PanelContext::Pick { source, .. }) => Ok(source.clone()),
            _ => Err(PopupError::NoIdentityContext),
        }
    }

    /// Re-run `prepare` for the current panel, if any
    pub(crate) async fn refresh_current_panel(&self) -> Result<(), PopupError> {
        if let Some(panel) = self.current_panel().await {
            let handler = self.registry.resolve(panel)?;
            handler.prepare(self).await?;
        }
        Ok(())
    }

    /// Resolve the effective selector of a handler under the active
    /// onboarding variation
    fn selector_for(&self, handler: &dyn PanelHandler) -> Selector {
        match (self.config.onboarding_variant, handler.variant_selector()) {
            (OnboardingVariant::Compact, Some(alternate)) => alternate,
            _ => handler.selector(),
        }
    }

    // ------------------------------------------------------------------
    // Identity directory
    // ------------------------------------------------------------------

    /// Refetch the full identity snapshot from the Host
    ///
    /// Mandatory after every mutation performed through the Host; no
    /// optimistic local update exists.
    pub async fn refresh_identities(&self) -> Result<(), PopupError> {
        let records = self.host.query_identities().await?;
        let live_state = self
            .host
            .query_identities_state(self.config.window_id)
            .await?;
        self.directory.write().await.replace(records, live_state)?;
        Ok(())
    }

    /// The current identity snapshot, in Host insertion order
    pub async fn identities(&self) -> Vec<Identity> {
        self.directory.read().await.identities().to_vec()
    }

    /// Translate an integer index back to its identity
    pub async fn lookup_identity_by_index(&self, user_context_id: u32) -> Option<Identity> {
        self.directory
            .read()
            .await
            .lookup_by_index(user_context_id)
            .cloned()
    }

    /// Next free "Container #NN" name, derived from the live snapshot
    pub async fn generate_default_name(&self) -> String {
        self.directory.read().await.generate_default_name()
    }

    // ------------------------------------------------------------------
    // Transition-edit state
    // ------------------------------------------------------------------

    /// Active transition-edit mode, `None` in the read-only view
    pub async fn transition_edit_mode(&self) -> Option<TransitionEditMode> {
        *self.edit_mode.read().await
    }

    pub(crate) async fn set_transition_edit_mode(&self, mode: Option<TransitionEditMode>) {
        *self.edit_mode.write().await = mode;
    }

    // ------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------

    /// Populate the directory and show the startup panel
    ///
    /// A Host failure here leaves nothing sensible to render, so the
    /// popup closes instead of showing an indeterminate state.
    pub async fn init(&self) -> Result<(), PopupError> {
        if let Err(error) = self.refresh_identities().await {
            tracing::warn!(error = %error, "identity fetch failed at startup, closing popup");
            self.surface.close_popup();
            return Ok(());
        }
        let (panel, context) = self.startup_panel().await?;
        self.navigate(panel, context).await
    }

    /// Whether the "what's new" badge should show for this version
    pub async fn whats_new_badge(&self) -> bool {
        match self.prefs.acknowledged_versions().await {
            Ok(acknowledged) => !acknowledged.contains(&self.config.extension_version),
            Err(error) => {
                tracing::warn!(error = %error, "acknowledged-version read failed");
                false
            }
        }
    }

    /// Acknowledge the startup badge for the running version
    pub async fn acknowledge_whats_new(&self) -> Result<(), PopupError> {
        self.prefs
            .acknowledge_version(&self.config.extension_version)
            .await?;
        self.refresh_current_panel().await
    }
}
