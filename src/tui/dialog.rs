//! Modal prompts.
//!
//! Every piece of data a command needs is gathered through the two blocking
//! primitives on [`Prompter`]. The terminal implementation runs its own small
//! event loop over the current scene until the user confirms or cancels, so
//! callers read as a straight sequence of questions.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::tui::{
    colors::{DIALOG_BG, DIALOG_HINT, DIALOG_TEXT},
    input::InputField,
    scene::Scene,
    surface::Surface,
    utils::centered_rows,
};

/// Blocking input primitives. `None` always means the user cancelled.
pub trait Prompter {
    /// Ask for a number within `min..=max`. Fractions are truncated.
    fn number(&mut self, title: &str, prompt: &str, min: i64, max: i64) -> Option<i64>;

    /// Ask for a line of text, optionally pre-filled. An empty submission is `Some("")`.
    fn text(&mut self, title: &str, prompt: &str, initial: Option<&str>) -> Option<String>;
}

/// Parse a numeric answer, returning the hint to show when it is not acceptable.
pub fn parse_number(input: &str, min: i64, max: i64) -> Result<i64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| "Please enter a number.".to_string())?;
    if value < min as f64 || value > max as f64 {
        return Err(format!("Enter a value between {min} and {max}."));
    }
    Ok(value.trunc() as i64)
}

/// Prompts drawn as a centred box over the current scene.
pub struct TerminalPrompter<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    scene: &'a Scene,
}

struct DialogState<'s> {
    title: &'s str,
    prompt: &'s str,
    footer: String,
    field: InputField,
    hint: Option<String>,
}

impl<'a, B: Backend> TerminalPrompter<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, scene: &'a Scene) -> Self {
        TerminalPrompter { terminal, scene }
    }

    fn ask<T>(
        &mut self,
        mut state: DialogState<'_>,
        accept: impl Fn(&str) -> Result<T, String>,
    ) -> Option<T> {
        match self.event_loop(&mut state, accept) {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("dialog {:?} failed, treating as cancel: {e}", state.title);
                None
            }
        }
    }

    fn event_loop<T>(
        &mut self,
        state: &mut DialogState<'_>,
        accept: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        let scene = self.scene;
        loop {
            self.terminal.draw(|f| {
                f.render_widget(Surface::new(scene), f.area());
                render_dialog(f, &*state);
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Enter => match accept(&state.field.value) {
                    Ok(answer) => return Ok(Some(answer)),
                    Err(hint) => state.hint = Some(hint),
                },
                _ => edit_field(&mut state.field, key),
            }
        }
    }
}

/// Apply an editing key to the field. Control and Alt chords are not typed.
fn edit_field(field: &mut InputField, key: KeyEvent) {
    match key.code {
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => field.handle_char(c),
        KeyCode::Backspace => field.handle_backspace(),
        KeyCode::Delete => field.handle_delete(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        _ => {}
    }
}

impl<B: Backend> Prompter for TerminalPrompter<'_, B> {
    fn number(&mut self, title: &str, prompt: &str, min: i64, max: i64) -> Option<i64> {
        let state = DialogState {
            title,
            prompt,
            footer: format!("{min}-{max}  Enter to confirm  Esc to cancel"),
            field: InputField::new(),
            hint: None,
        };
        self.ask(state, |input| parse_number(input, min, max))
    }

    fn text(&mut self, title: &str, prompt: &str, initial: Option<&str>) -> Option<String> {
        let state = DialogState {
            title,
            prompt,
            footer: "Enter to confirm  Esc to cancel".to_string(),
            field: initial.map(InputField::with_value).unwrap_or_default(),
            hint: None,
        };
        self.ask(state, |input| Ok(input.to_string()))
    }
}

fn render_dialog(f: &mut Frame, state: &DialogState<'_>) {
    let area = centered_rows(60, 7, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", state.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .style(Style::default().bg(DIALOG_BG).fg(DIALOG_TEXT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(state.prompt), chunks[0]);
    f.render_widget(
        Paragraph::new(state.field.value.as_str())
            .style(Style::default().add_modifier(Modifier::UNDERLINED)),
        chunks[1],
    );
    let footer = match &state.hint {
        Some(hint) => Line::from(Span::styled(hint.as_str(), Style::default().fg(DIALOG_HINT))),
        None => Line::from(state.footer.as_str()),
    };
    f.render_widget(Paragraph::new(footer), chunks[3]);

    let before: String = state.field.value.chars().take(state.field.cursor).collect();
    let offset = Span::raw(before).width() as u16;
    f.set_cursor_position((
        (chunks[1].x + offset).min(chunks[1].right().saturating_sub(1)),
        chunks[1].y,
    ));
}

#[cfg(test)]
pub mod scripted {
    //! A prompter that replays canned answers, for driving command handlers in tests.

    use std::collections::VecDeque;

    use super::Prompter;

    #[derive(Debug, Clone)]
    pub enum Answer {
        Number(i64),
        Text(&'static str),
        /// Confirm whatever the field was pre-filled with.
        Accept,
        Cancel,
    }

    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        /// Every prompt shown, in order.
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            ScriptedPrompter {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.asked.push(prompt.to_string());
            self.answers.pop_front().unwrap_or(Answer::Cancel)
        }
    }

    impl Prompter for ScriptedPrompter {
        // Answers are returned unchecked so tests can probe what lies past the dialog bounds.
        fn number(&mut self, _title: &str, prompt: &str, _min: i64, _max: i64) -> Option<i64> {
            match self.next(prompt) {
                Answer::Number(n) => Some(n),
                Answer::Cancel => None,
                other => panic!("expected a number answer for {prompt:?}, got {other:?}"),
            }
        }

        fn text(&mut self, _title: &str, prompt: &str, initial: Option<&str>) -> Option<String> {
            match self.next(prompt) {
                Answer::Text(s) => Some(s.to_string()),
                Answer::Accept => Some(initial.unwrap_or_default().to_string()),
                Answer::Cancel => None,
                other => panic!("expected a text answer for {prompt:?}, got {other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_bounds() {
        assert_eq!(parse_number("3", 1, 5), Ok(3));
        assert_eq!(parse_number(" 5 ", 1, 5), Ok(5));
        assert_eq!(parse_number("2.9", 1, 5), Ok(2));
        assert!(parse_number("0", 1, 5).is_err());
        assert!(parse_number("5.5", 1, 5).is_err());
        assert!(parse_number("six", 1, 5).is_err());
        assert!(parse_number("", 1, 5).is_err());
        assert!(parse_number("NaN", 1, 5).is_err());
    }

    #[test]
    fn test_edit_field_ignores_control_chords() {
        let mut field = InputField::with_value("ab");
        edit_field(&mut field, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        edit_field(&mut field, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(field.value, "ab");

        edit_field(&mut field, KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        edit_field(&mut field, KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        edit_field(&mut field, KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(field.value, "bC");
    }
}
