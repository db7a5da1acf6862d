//! Frame driver: fires the three phases in host order

use std::rc::Rc;

use tracing::warn;

use crate::config::TickerConfig;
use crate::ticker::Ticker;

/// Drives a [`Ticker`] one frame at a time.
///
/// Each frame runs the requested number of fixed steps, then update, then late
/// update. The driver does no timekeeping; the host decides how many fixed
/// steps a frame needs.
pub struct FrameDriver {
    ticker: Rc<Ticker>,
    max_fixed_steps: u32,
    frames: u64,
}

impl FrameDriver {
    pub fn new(ticker: Rc<Ticker>, config: &TickerConfig) -> Self {
        Self {
            ticker,
            max_fixed_steps: config.max_fixed_steps_per_frame,
            frames: 0,
        }
    }

    /// Run one frame. Returns the number of fixed steps actually run.
    pub fn frame(&mut self, fixed_steps: u32) -> u32 {
        // Clamp to avoid spiral of death
        let steps = if fixed_steps > self.max_fixed_steps {
            warn!(
                requested = fixed_steps,
                max = self.max_fixed_steps,
                "Clamping fixed steps for frame"
            );
            self.max_fixed_steps
        } else {
            fixed_steps
        };

        for _ in 0..steps {
            self.ticker.on_fixed_update();
        }
        self.ticker.on_update();
        self.ticker.on_late_update();

        self.frames += 1;
        steps
    }

    /// Frames driven so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn ticker(&self) -> &Rc<Ticker> {
        &self.ticker
    }
}
