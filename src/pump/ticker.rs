//! Tick event sources that pace the frame loop.

use std::time::{Duration, Instant};

/// Delivers the "next frame" events that pace the pump.
///
/// Stands in for a display-refresh callback: the loop body runs to completion, then parks in
/// [`TickSource::wait_tick`] until the next tick is due. This keeps at most one tick in flight.
pub trait TickSource {
    /// Block until the next tick.
    fn wait_tick(&mut self);
}

/// Fixed-period ticker, the timer fallback when no display sync is available.
///
/// Deadlines advance from the previous deadline rather than from "now", so one slow tick does
/// not permanently shift the schedule; a tick that overruns a whole period resets the phase
/// instead of sleeping.
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    next: Option<Instant>,
}

impl IntervalTicker {
    /// Default period approximating a 60 Hz display.
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(16);

    /// Create a ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Create a ticker targeting `fps` frames per second (minimum 1).
    pub fn target_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD)
    }
}

impl TickSource for IntervalTicker {
    fn wait_tick(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now + self.period);
        if due > now {
            std::thread::sleep(due - now);
        }

        let mut next = due + self.period;
        let now = Instant::now();
        if next < now {
            next = now + self.period;
        }
        self.next = Some(next);
    }
}

/// Free-running ticker for tests and offline runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateTicker;

impl TickSource for ImmediateTicker {
    fn wait_tick(&mut self) {}
}
