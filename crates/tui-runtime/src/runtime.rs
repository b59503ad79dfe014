use std::{io, time::Duration};

use crate::{
    App,
    event_loop::{EventLoop, LoopEvent},
};

/// TUI application runtime.
///
/// Owns the event loop and executes an [`App`] until it asks to exit. The
/// tick timer is exposed to the application as an `Option<Duration>`
/// interval so it can be disarmed permanently (e.g. when a game ends) and
/// rearmed later (e.g. on restart).
#[derive(Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(),
        }
    }

    /// Arms the tick timer, or disarms it with `None`.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Runs the application.
    ///
    /// Calls `app.init()` once, then loops until `app.should_exit()`:
    /// ticks go to `app.update()`, terminal events to `app.handle_event()`,
    /// and each completed transition is followed by one `app.draw()`.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => {
                        app.update(&mut self);
                    }
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Input(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
