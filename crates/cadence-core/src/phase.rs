//! Host frame phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three per-frame lifecycle points the host engine signals.
///
/// Variants are listed in the order a host conventionally fires them within
/// a frame: fixed steps first, then the variable-rate update, then late update.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPhase {
    /// Fixed-rate step (physics)
    FixedUpdate,
    /// Once-per-frame update
    Update,
    /// Once-per-frame update that runs after every `Update` subscriber
    LateUpdate,
}

impl TickPhase {
    /// All phases in conventional host order
    pub const ALL: [TickPhase; 3] = [
        TickPhase::FixedUpdate,
        TickPhase::Update,
        TickPhase::LateUpdate,
    ];

    /// Stable index, usable for per-phase arrays
    pub fn index(self) -> usize {
        match self {
            TickPhase::FixedUpdate => 0,
            TickPhase::Update => 1,
            TickPhase::LateUpdate => 2,
        }
    }

    /// Snake-case name, matching the serialized form
    pub fn name(self) -> &'static str {
        match self {
            TickPhase::FixedUpdate => "fixed_update",
            TickPhase::Update => "update",
            TickPhase::LateUpdate => "late_update",
        }
    }
}

impl fmt::Display for TickPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
