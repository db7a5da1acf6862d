//! Cadence Runtime - Per-frame callback dispatch
//!
//! Provides the pieces a host game loop uses to fan its frame phases out to
//! interested objects:
//! - `Ticker` - three ordered subscriber channels (update, late update, fixed update)
//! - `Callback` / `Updateable` / `LateUpdateable` / `FixedUpdateable` - subscriber types
//! - `TickerHost` - scene-owned lifecycle slot for the single ticker instance
//! - `FrameDriver` - fires fixed steps, update and late update in host order
//! - `TickerConfig` - TOML-backed tunables

mod channel;
mod config;
mod driver;
mod host;
mod subscriber;
mod ticker;

pub use cadence_core::{CadenceError, Result, TickPhase};
pub use channel::Channel;
pub use config::TickerConfig;
pub use driver::FrameDriver;
pub use host::{HostState, TickerHost};
pub use subscriber::{Callback, FixedUpdateable, LateUpdateable, Updateable};
pub use ticker::Ticker;
