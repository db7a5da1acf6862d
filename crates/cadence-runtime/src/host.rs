//! Host lifecycle slot for the ticker.
//!
//! A [`TickerHost`] stands in for the scene that owns the dispatcher. The scene
//! creates the ticker when it loads ([`TickerHost::awake`]) and tears it down
//! when it unloads ([`TickerHost::destroy`]). Access through the slot while no
//! instance is live fails with [`CadenceError::NotInitialized`].

use std::rc::Rc;

use cadence_core::{CadenceError, Result};
use tracing::debug;

use crate::config::TickerConfig;
use crate::ticker::Ticker;

/// Lifecycle state of the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// No instance has been created yet.
    Unloaded,
    /// An instance exists and may receive ticks.
    Live,
    /// The last instance was destroyed.
    Destroyed,
}

/// Owns at most one live [`Ticker`].
pub struct TickerHost {
    config: TickerConfig,
    instance: Option<Rc<Ticker>>,
    state: HostState,
}

impl TickerHost {
    pub fn new(config: TickerConfig) -> Self {
        Self {
            config,
            instance: None,
            state: HostState::Unloaded,
        }
    }

    /// Create the ticker instance. Fails if one is already live.
    pub fn awake(&mut self) -> Result<Rc<Ticker>> {
        if self.instance.is_some() {
            return Err(CadenceError::AlreadyInitialized);
        }
        let ticker = Rc::new(Ticker::with_config(&self.config));
        self.instance = Some(Rc::clone(&ticker));
        self.state = HostState::Live;
        debug!(capacity = self.config.initial_capacity, "Ticker created");
        Ok(ticker)
    }

    /// The live ticker instance
    pub fn ticker(&self) -> Result<Rc<Ticker>> {
        self.instance.clone().ok_or(CadenceError::NotInitialized)
    }

    /// Clear every subscription and drop the instance. No-op if nothing is live.
    ///
    /// Handles obtained earlier keep the `Ticker` allocation alive, but it no
    /// longer has subscribers and the host stops driving it.
    pub fn destroy(&mut self) {
        if let Some(ticker) = self.instance.take() {
            ticker.clear();
            self.state = HostState::Destroyed;
            debug!("Ticker destroyed");
        }
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == HostState::Live
    }

    pub fn config(&self) -> &TickerConfig {
        &self.config
    }
}

impl Default for TickerHost {
    fn default() -> Self {
        Self::new(TickerConfig::default())
    }
}
