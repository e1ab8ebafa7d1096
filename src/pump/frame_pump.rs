//! The per-frame scheduling loop: draw, read back, filter, write out, reschedule.

use crate::capture::source::{FrameSource, SourceState};
use crate::filter::registry::FilterRegistry;
use crate::foundation::core::FrameSize;
use crate::foundation::error::ChromaResult;
use crate::pump::ticker::TickSource;
use crate::surface::canvas::FrameSurface;

/// Scheduling state of the pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpState {
    /// No playing source; no ticks run.
    Idle,
    /// Ticks run, one at a time.
    Running,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was drawn, filtered, and written back.
    Frame,
    /// The source was paused or ended (or no playing signal has arrived); the pump is idle.
    Stopped,
}

/// Aggregated pump counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Completed frame ticks.
    pub ticks_total: u64,
    /// Frames that went through the active filter; equal to `ticks_total` unless a tick failed
    /// after filtering but before the write-back.
    pub frames_filtered: u64,
}

/// Options for the pump's target region.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct PumpOpts {
    /// Frame region drawn and filtered each tick, anchored at the surface origin.
    pub region: FrameSize,
}

impl Default for PumpOpts {
    fn default() -> Self {
        Self {
            region: FrameSize::DEFAULT,
        }
    }
}

/// The frame-scheduling loop.
///
/// A two-state machine: the pump enters `Running` only on an explicit playing signal and drops
/// back to `Idle` the first time it observes a paused or ended source, terminal for that play
/// session until a later playing signal restarts the loop. Exactly one tick is ever in flight:
/// [`FramePump::tick`] is synchronous, and [`FramePump::run`] waits on the tick source between
/// frames. The registry is read once per tick, so a selection made between ticks takes effect
/// on the next frame.
#[derive(Debug)]
pub struct FramePump {
    state: PumpState,
    opts: PumpOpts,
    stats: PumpStats,
}

impl FramePump {
    /// Create an idle pump.
    pub fn new(opts: PumpOpts) -> Self {
        Self {
            state: PumpState::Idle,
            opts,
            stats: PumpStats::default(),
        }
    }

    /// Current scheduling state.
    pub fn state(&self) -> PumpState {
        self.state
    }

    /// Counters accumulated across all play sessions of this pump.
    pub fn stats(&self) -> PumpStats {
        self.stats
    }

    /// React to the source's "playing" signal: Idle -> Running.
    pub fn notify_playing(&mut self) {
        if self.state == PumpState::Idle {
            tracing::debug!("pump entering running state");
            self.state = PumpState::Running;
        }
    }

    #[tracing::instrument(skip(self, source, surface, registry))]
    /// Run one tick of the loop.
    ///
    /// A paused or ended source stops the loop before anything is drawn or filtered. Otherwise
    /// the source's current frame is drawn into the target region, read back, run through the
    /// registry's active filter in place, and written out again. Errors are terminal to the
    /// play session and leave the pump idle.
    pub fn tick(
        &mut self,
        source: &mut dyn FrameSource,
        surface: &mut dyn FrameSurface,
        registry: &FilterRegistry,
    ) -> ChromaResult<TickOutcome> {
        if self.state != PumpState::Running {
            return Ok(TickOutcome::Stopped);
        }
        if source.state() != SourceState::Playing {
            tracing::debug!(state = ?source.state(), "source not playing; pump going idle");
            self.state = PumpState::Idle;
            return Ok(TickOutcome::Stopped);
        }

        if let Err(e) = self.tick_body(source, surface, registry) {
            self.state = PumpState::Idle;
            return Err(e);
        }

        self.stats.ticks_total += 1;
        Ok(TickOutcome::Frame)
    }

    fn tick_body(
        &mut self,
        source: &mut dyn FrameSource,
        surface: &mut dyn FrameSurface,
        registry: &FilterRegistry,
    ) -> ChromaResult<()> {
        let FrameSize { width, height } = self.opts.region;
        surface.draw_frame(source, 0, 0, width, height)?;
        let mut buffer = surface.read_pixels(0, 0, width, height)?;
        registry.active().apply(buffer.bytes_mut());
        self.stats.frames_filtered += 1;
        surface.write_pixels(&buffer, 0, 0)
    }

    /// Drive ticks until the loop stops, waiting on `ticker` between frames.
    ///
    /// Returns immediately with zero new ticks if no playing signal has arrived.
    pub fn run(
        &mut self,
        source: &mut dyn FrameSource,
        surface: &mut dyn FrameSurface,
        registry: &FilterRegistry,
        ticker: &mut dyn TickSource,
    ) -> ChromaResult<PumpStats> {
        while self.tick(source, surface, registry)? == TickOutcome::Frame {
            ticker.wait_tick();
        }
        Ok(self.stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pump/frame_pump.rs"]
mod tests;
