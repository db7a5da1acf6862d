//! Ordered subscriber list for one tick phase

use crate::subscriber::Callback;

/// An ordered set of callbacks. Each callback appears at most once.
pub struct Channel {
    subscribers: Vec<Callback>,
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subscribers: Vec::with_capacity(capacity),
        }
    }

    /// Add a callback at the end of the order. An existing entry for the same
    /// subscriber is removed first, so the callback moves to the end. The
    /// replaced entry is returned.
    #[must_use = "dropping a callback can run owner teardown; drop it outside any borrow"]
    pub fn add(&mut self, callback: Callback) -> Option<Callback> {
        let replaced = self.remove(&callback);
        self.subscribers.push(callback);
        replaced
    }

    /// Remove a callback, returning the entry that was subscribed
    #[must_use = "dropping a callback can run owner teardown; drop it outside any borrow"]
    pub fn remove(&mut self, callback: &Callback) -> Option<Callback> {
        let index = self.subscribers.iter().position(|c| c.same_as(callback))?;
        Some(self.subscribers.remove(index))
    }

    pub fn contains(&self, callback: &Callback) -> bool {
        self.subscribers.iter().any(|c| c.same_as(callback))
    }

    /// Copy of the current subscriber list, in invocation order
    pub fn snapshot(&self) -> Vec<Callback> {
        self.subscribers.clone()
    }

    /// Take every subscriber out of the channel, keeping its allocation
    #[must_use = "dropping a callback can run owner teardown; drop it outside any borrow"]
    pub fn drain(&mut self) -> Vec<Callback> {
        self.subscribers.drain(..).collect()
    }

    pub fn capacity(&self) -> usize {
        self.subscribers.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}
