use std::time::Duration;

use blockfall_engine::{PieceSeed, Session, SessionStatus};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tui_runtime::{App, Runtime};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay};

const PLAYING_BINDINGS: &[KeyBinding<'static>] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑"], "Rotate"),
    (&["Space"], "Hard Drop"),
    (&["Q"], "Quit"),
];
const GAME_OVER_BINDINGS: &[KeyBinding<'static>] = &[(&["R"], "Restart"), (&["Q"], "Quit")];

#[derive(Debug)]
pub(crate) struct PlayApp {
    session: Session,
    tick_interval: Duration,
    seed: Option<PieceSeed>,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(tick_interval: Duration, seed: Option<PieceSeed>) -> Self {
        Self {
            session: new_session(seed),
            tick_interval,
            seed,
            is_exiting: false,
        }
    }

    /// Tears the finished session down and starts over: fresh board, fresh
    /// score, fresh piece, and a rearmed gravity timer.
    fn restart(&mut self, runtime: &mut Runtime) {
        self.session = new_session(self.seed);
        runtime.set_tick_interval(Some(self.tick_interval));
    }

    /// Disarms the gravity timer once the session ends; it stays disarmed
    /// until a restart rearms it.
    fn sync_timer(&self, runtime: &mut Runtime) {
        if self.session.status().is_game_over() {
            runtime.set_tick_interval(None);
        }
    }
}

/// With an explicit seed a restart replays the identical piece sequence;
/// without one every session draws fresh randomness.
fn new_session(seed: Option<PieceSeed>) -> Session {
    seed.map_or_else(Session::new, Session::with_seed)
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(self.tick_interval));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        let is_running = self.session.status().is_running();
        match key.code {
            KeyCode::Left if is_running => _ = self.session.try_move_left(),
            KeyCode::Right if is_running => _ = self.session.try_move_right(),
            KeyCode::Down if is_running => _ = self.session.try_soft_drop(),
            KeyCode::Up if is_running => _ = self.session.try_rotate(),
            KeyCode::Char(' ') if is_running => {
                self.session.hard_drop();
                self.sync_timer(runtime);
            }
            KeyCode::Char('r') if !is_running => self.restart(runtime),
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session);
        let bindings = match self.session.status() {
            SessionStatus::Running => PLAYING_BINDINGS,
            SessionStatus::GameOver => GAME_OVER_BINDINGS,
        };

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(session_display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.session.tick();
        self.sync_timer(runtime);
    }
}
