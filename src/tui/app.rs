//! Main application loop for the canvas interface.
//!
//! `App` owns the task list for the lifetime of the window. Each pass of the
//! loop rebuilds the scene, paints it in one frame and then blocks for a single
//! input event. A click is routed to a button; the matching command runs to
//! completion, prompts included, before the next event is read.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use crate::db::TaskStore;
use crate::handlers;
use crate::tui::{
    dialog::TerminalPrompter,
    router::{route, Command},
    scene::Scene,
    surface::{Surface, Viewport},
};

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Redraw,
    Run(Command),
    Quit,
}

/// Application state: the task list and where it lives on disk.
pub struct App {
    store: TaskStore,
    db_path: PathBuf,
}

impl App {
    /// Create a new App, loading tasks from `db_path` (empty if missing or unreadable).
    pub fn new(db_path: &Path) -> Self {
        App {
            store: TaskStore::load(db_path),
            db_path: db_path.to_path_buf(),
        }
    }

    fn scene(&self) -> Scene {
        Scene::build(self.store.tasks(), Local::now().time())
    }

    /// Translate one input event against the scene currently on screen.
    fn action_for(event: &Event, scene: &Scene, area: Rect) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => Action::Quit,
                KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
                KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    Action::Redraw
                }
                KeyCode::Char(c) => Command::from_shortcut(c).map_or(Action::Redraw, Action::Run),
                _ => Action::Redraw,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Viewport::new(area)
                    .point_at(mouse.column, mouse.row)
                    .and_then(|(x, y)| route(&scene.buttons, x, y))
                    .map_or(Action::Redraw, Action::Run)
            }
            _ => Action::Redraw,
        }
    }

    /// Main event loop. Returns after the exit key, having saved the task list.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let scene = self.scene();
            let completed = terminal.draw(|f| f.render_widget(Surface::new(&scene), f.area()))?;
            let area = completed.area;

            let event = event::read()?;
            match Self::action_for(&event, &scene, area) {
                Action::Redraw => {}
                Action::Run(command) => {
                    let mut prompter = TerminalPrompter::new(terminal, &scene);
                    handlers::execute(command, &mut self.store, &self.db_path, &mut prompter);
                }
                Action::Quit => {
                    self.store.persist(&self.db_path);
                    log::info!("exiting with {} tasks", self.store.len());
                    return Ok(());
                }
            }
        }
    }
}
