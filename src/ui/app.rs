//! Main TUI application state and driver event loop

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::scheduler::Scheduler;

/// How often the driver loop wakes up to redraw and poll input.
///
/// Rendering is decoupled from the step clock: the clock thread mutates the
/// run state at the configured tick rate, the driver just snapshots it.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// The main application state
pub struct App {
    /// The scheduler driving the animation (owns the clock thread)
    scheduler: Scheduler,

    /// Display name of the selected algorithm
    algorithm_name: &'static str,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new app around an already-started scheduler
    pub fn new(scheduler: Scheduler, algorithm_name: &'static str) -> Self {
        App {
            scheduler,
            algorithm_name,
            should_quit: false,
        }
    }

    /// Run the driver event loop until quit.
    ///
    /// On exit the scheduler is stopped before returning, so algorithm state
    /// is destroyed behind the disarm barrier before terminal teardown.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key.code);
                    }
                }
            }
        }

        self.scheduler.stop();
        Ok(())
    }

    /// Render the UI from a snapshot of the run state
    fn render(&mut self, frame: &mut Frame) {
        let run = self.scheduler.frame();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_bars_pane(frame, chunks[0], &run, self.algorithm_name);
        super::panes::render_status_bar(
            frame,
            chunks[1],
            self.algorithm_name,
            self.scheduler.rate(),
            run.steps,
            run.phase,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('w') => {
                self.scheduler.speed_up();
            }
            KeyCode::Down | KeyCode::Char('s') => {
                self.scheduler.speed_down();
            }
            KeyCode::Enter => {
                self.scheduler.reset_speed();
            }
            _ => {}
        }
    }
}
