use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// A TUI application driven by [`Runtime::run`].
///
/// The runtime serializes the three event sources — the tick timer,
/// terminal input, and rendering — into a single cooperative loop, so an
/// implementation never observes two callbacks running at once and a draw
/// never interleaves with a state mutation.
pub trait App {
    /// Called once before the loop starts; the usual place to arm the tick
    /// timer via [`Runtime::set_tick_interval`].
    fn init(&mut self, runtime: &mut Runtime);

    /// When this returns true the loop ends and the terminal is restored.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key input, resize, ...).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the current state. Called after every completed update or
    /// input event, never between them.
    fn draw(&self, frame: &mut Frame);

    /// Advances time-driven state by one tick.
    fn update(&mut self, runtime: &mut Runtime);
}
