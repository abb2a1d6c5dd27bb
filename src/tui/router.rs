//! Button geometry and click routing.

/// The five commands reachable from the button bar, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Complete,
    Delete,
    Edit,
    ClearCompleted,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Add,
        Command::Complete,
        Command::Delete,
        Command::Edit,
        Command::ClearCompleted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Add => "Add Task",
            Command::Complete => "Complete Task",
            Command::Delete => "Delete Task",
            Command::Edit => "Edit Task",
            Command::ClearCompleted => "Clear Completed",
        }
    }

    /// Keyboard shortcut for terminals that do not report mouse clicks.
    pub fn shortcut(self) -> char {
        match self {
            Command::Add => 'a',
            Command::Complete => 'c',
            Command::Delete => 'd',
            Command::Edit => 'e',
            Command::ClearCompleted => 'x',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.shortcut() == c)
    }
}

/// A drawn button in canvas units. `(x, y)` is the top-left corner; the
/// rectangle extends `width` to the right and `height` downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub command: Command,
}

impl Button {
    /// Edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.x + self.width && self.y - self.height <= y && y <= self.y
    }
}

/// The first button, in drawing order, whose rectangle contains the point.
pub fn route(buttons: &[Button], x: f64, y: f64) -> Option<Command> {
    buttons.iter().find(|b| b.contains(x, y)).map(|b| b.command)
}
