//! Tick dispatcher
//!
//! The [`Ticker`] owns one [`Channel`] per [`TickPhase`] and forwards each host
//! tick to that phase's subscribers in registration order.
//!
//! Each tick iterates a snapshot taken when the tick starts. Callbacks may
//! register or unregister subscribers (themselves included) through a shared
//! `Rc<Ticker>` while a tick is running. Such changes apply from the next tick
//! of that phase, so a subscriber added mid-tick is not called until then, and
//! a subscriber removed mid-tick still receives the current tick.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cadence_core::TickPhase;
use tracing::trace;

use crate::channel::Channel;
use crate::config::TickerConfig;
use crate::subscriber::{Callback, FixedUpdateable, LateUpdateable, Updateable};

/// Centralized per-frame callback dispatcher.
///
/// Single-threaded: the type is neither `Send` nor `Sync`. Share it within the
/// host thread as `Rc<Ticker>`.
pub struct Ticker {
    channels: [RefCell<Channel>; 3],
    tick_counts: [Cell<u64>; 3],
    trace_dispatch: bool,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    /// Create a ticker with default configuration
    pub fn new() -> Self {
        Self::with_config(&TickerConfig::default())
    }

    pub fn with_config(config: &TickerConfig) -> Self {
        let channel = || RefCell::new(Channel::with_capacity(config.initial_capacity));
        Self {
            channels: [channel(), channel(), channel()],
            tick_counts: Default::default(),
            trace_dispatch: config.trace_dispatch,
        }
    }

    // --- Registration ---

    /// Subscribe `callback` to `phase`. Re-registering moves it to the end.
    pub fn register(&self, phase: TickPhase, callback: Callback) {
        // Replaced entries are dropped after the borrow ends; an owner's
        // teardown may call back into the ticker.
        let _replaced = {
            let mut channel = self.channels[phase.index()].borrow_mut();
            let replaced = channel.add(callback);
            trace!(phase = %phase, subscribers = channel.len(), "Registered subscriber");
            replaced
        };
    }

    /// Unsubscribe `callback` from `phase`. No-op if it is not subscribed.
    pub fn unregister(&self, phase: TickPhase, callback: &Callback) {
        let _removed = {
            let mut channel = self.channels[phase.index()].borrow_mut();
            let removed = channel.remove(callback);
            if removed.is_some() {
                trace!(phase = %phase, subscribers = channel.len(), "Unregistered subscriber");
            }
            removed
        };
    }

    /// Subscribe `callback` to the update channel
    pub fn register_update(&self, callback: Callback) {
        self.register(TickPhase::Update, callback);
    }

    /// Subscribe `callback` to the late-update channel
    pub fn register_late_update(&self, callback: Callback) {
        self.register(TickPhase::LateUpdate, callback);
    }

    /// Subscribe `callback` to the fixed-update channel
    pub fn register_fixed_update(&self, callback: Callback) {
        self.register(TickPhase::FixedUpdate, callback);
    }

    /// Unsubscribe `callback` from the update channel
    pub fn unregister_update(&self, callback: &Callback) {
        self.unregister(TickPhase::Update, callback);
    }

    /// Unsubscribe `callback` from the late-update channel
    pub fn unregister_late_update(&self, callback: &Callback) {
        self.unregister(TickPhase::LateUpdate, callback);
    }

    /// Unsubscribe `callback` from the fixed-update channel
    pub fn unregister_fixed_update(&self, callback: &Callback) {
        self.unregister(TickPhase::FixedUpdate, callback);
    }

    /// Subscribe an [`Updateable`] to the update channel.
    ///
    /// The subscription is keyed on the `Rc` target, so registering the same
    /// object again moves it to the end instead of adding a second entry.
    pub fn register_updateable<T: Updateable + 'static>(&self, target: &Rc<T>) -> Callback {
        let callback = Callback::from_updateable(target);
        self.register_update(callback.clone());
        callback
    }

    /// Subscribe a [`LateUpdateable`] to the late-update channel
    pub fn register_late_updateable<T: LateUpdateable + 'static>(
        &self,
        target: &Rc<T>,
    ) -> Callback {
        let callback = Callback::from_late_updateable(target);
        self.register_late_update(callback.clone());
        callback
    }

    /// Subscribe a [`FixedUpdateable`] to the fixed-update channel
    pub fn register_fixed_updateable<T: FixedUpdateable + 'static>(
        &self,
        target: &Rc<T>,
    ) -> Callback {
        let callback = Callback::from_fixed_updateable(target);
        self.register_fixed_update(callback.clone());
        callback
    }

    /// Unsubscribe an [`Updateable`] from the update channel
    pub fn unregister_updateable<T: Updateable + 'static>(&self, target: &Rc<T>) {
        self.unregister_update(&Callback::from_updateable(target));
    }

    /// Unsubscribe a [`LateUpdateable`] from the late-update channel
    pub fn unregister_late_updateable<T: LateUpdateable + 'static>(&self, target: &Rc<T>) {
        self.unregister_late_update(&Callback::from_late_updateable(target));
    }

    /// Unsubscribe a [`FixedUpdateable`] from the fixed-update channel
    pub fn unregister_fixed_updateable<T: FixedUpdateable + 'static>(&self, target: &Rc<T>) {
        self.unregister_fixed_update(&Callback::from_fixed_updateable(target));
    }

    /// Drop every subscription on every channel
    pub fn clear(&self) {
        let drained: Vec<Vec<Callback>> = self
            .channels
            .iter()
            .map(|channel| channel.borrow_mut().drain())
            .collect();
        // Owners may unregister or re-register while their callbacks drop.
        drop(drained);
    }

    // --- Host ticks ---

    /// Invoke every subscriber of `phase` in registration order
    pub fn tick(&self, phase: TickPhase) {
        let counter = &self.tick_counts[phase.index()];
        counter.set(counter.get() + 1);

        // Release the borrow before invoking so callbacks can re-enter.
        let snapshot = {
            let channel = self.channels[phase.index()].borrow();
            if channel.is_empty() {
                return;
            }
            channel.snapshot()
        };

        if self.trace_dispatch {
            trace!(phase = %phase, subscribers = snapshot.len(), "Dispatching tick");
        }

        for callback in &snapshot {
            callback.invoke();
        }
    }

    /// Host hook for the per-frame update
    pub fn on_update(&self) {
        self.tick(TickPhase::Update);
    }

    /// Host hook for the late update, after every update subscriber ran
    pub fn on_late_update(&self) {
        self.tick(TickPhase::LateUpdate);
    }

    /// Host hook for one fixed step
    pub fn on_fixed_update(&self) {
        self.tick(TickPhase::FixedUpdate);
    }

    // --- Queries ---

    pub fn subscriber_count(&self, phase: TickPhase) -> usize {
        self.channels[phase.index()].borrow().len()
    }

    pub fn is_registered(&self, phase: TickPhase, callback: &Callback) -> bool {
        self.channels[phase.index()].borrow().contains(callback)
    }

    /// Reserved slots in the channel for `phase`
    pub fn channel_capacity(&self, phase: TickPhase) -> usize {
        self.channels[phase.index()].borrow().capacity()
    }

    /// Whether every tick emits a trace event
    pub fn trace_dispatch(&self) -> bool {
        self.trace_dispatch
    }

    /// Number of ticks received for `phase`, including ticks with no subscribers
    pub fn tick_count(&self, phase: TickPhase) -> u64 {
        self.tick_counts[phase.index()].get()
    }
}
