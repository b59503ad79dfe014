use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// Events delivered to the application.
#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum LoopEvent {
    /// The tick interval elapsed.
    Tick,
    /// The state changed since the last render.
    Render,
    /// A terminal event (key input, mouse, resize).
    Input(CrosstermEvent),
}

/// Cooperative tick/render/input scheduler.
///
/// Ticks fire at the configured interval, or not at all while the interval
/// is `None` (a disarmed timer stays disarmed until rearmed). Renders are
/// dirty-driven: one fires after every tick or input event, so the
/// application draws each completed state transition exactly once and is
/// never asked to draw mid-transition.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            // Initial render is required on startup
            dirty: true,
        }
    }

    /// Arms the tick timer, or disarms it with `None`.
    ///
    /// Arming also resets the interval's phase, so a rearmed timer waits a
    /// full interval before its first tick.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
        self.last_tick = Instant::now();
    }

    /// Blocks until the next event is due and returns it.
    pub(super) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(LoopEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(LoopEvent::Render);
            }

            if let Some(timeout) = self.next_tick_in(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Time until the next tick is due; `None` blocks indefinitely on
    /// input, which is the steady state of a disarmed timer.
    fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        let interval = self.tick_interval?;
        Some((self.last_tick + interval).saturating_duration_since(now))
    }
}
