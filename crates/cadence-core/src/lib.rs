//! Cadence Core - Foundational types for the Cadence tick dispatcher
//!
//! This crate provides the types that the runtime crate depends on:
//! - `TickPhase` - The three host frame phases
//! - Error types and Result alias

mod error;
mod phase;

pub use error::{CadenceError, Result};
pub use phase::TickPhase;
