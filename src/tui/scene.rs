//! Scene construction.
//!
//! A `Scene` is everything drawn in one frame: header, button bar and task
//! rows, expressed in canvas units (800 x 550, origin at the centre, y up).
//! It is rebuilt from scratch after every change and carries the button
//! geometry the click router tests against.

use chrono::NaiveTime;
use ratatui::style::Color;

use crate::task::Task;
use crate::tui::colors::{self, BUTTON_FILL, BUTTON_LABEL, HEADER, OVERDUE};
use crate::tui::router::{Button, Command};

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 550.0;

pub const TITLE: &str = "To-Do List";
const HEADER_Y: f64 = 230.0;

const BUTTON_WIDTH: f64 = 140.0;
const BUTTON_HEIGHT: f64 = 40.0;
const BUTTON_SPACING: f64 = 20.0;
const BUTTON_TOP: f64 = 150.0;
/// Label baseline, measured down from the button's top edge.
const BUTTON_LABEL_DROP: f64 = 30.0;

const ROW_TOP: f64 = 70.0;
const ROW_LEFT: f64 = -300.0;
const ROW_STEP: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A single drawing instruction in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid rectangle; `(x, y)` is the top-left corner.
    Fill { x: f64, y: f64, width: f64, height: f64, color: Color },
    /// Text whose baseline is anchored at `(x, y)`.
    Text { x: f64, y: f64, text: String, color: Color, align: Align, bold: bool },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub ops: Vec<DrawOp>,
    pub buttons: Vec<Button>,
}

impl Scene {
    /// Lay out the whole canvas for `tasks` as seen at wall-clock time `now`.
    pub fn build(tasks: &[Task], now: NaiveTime) -> Self {
        let mut scene = Scene::default();
        scene.draw_header();
        scene.draw_buttons();
        scene.draw_tasks(tasks, now);
        scene
    }

    fn draw_header(&mut self) {
        self.ops.push(DrawOp::Text {
            x: 0.0,
            y: HEADER_Y,
            text: TITLE.to_string(),
            color: HEADER,
            align: Align::Center,
            bold: true,
        });
    }

    fn draw_buttons(&mut self) {
        let count = Command::ALL.len() as f64;
        let total_width = count * BUTTON_WIDTH + (count - 1.0) * BUTTON_SPACING;
        let start_x = -(total_width / 2.0).floor();

        for (i, command) in Command::ALL.into_iter().enumerate() {
            let x = start_x + i as f64 * (BUTTON_WIDTH + BUTTON_SPACING);
            self.ops.push(DrawOp::Fill {
                x,
                y: BUTTON_TOP,
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
                color: BUTTON_FILL,
            });
            self.ops.push(DrawOp::Text {
                x: x + BUTTON_WIDTH / 2.0,
                y: BUTTON_TOP - BUTTON_LABEL_DROP,
                text: command.label().to_string(),
                color: BUTTON_LABEL,
                align: Align::Center,
                bold: true,
            });
            self.buttons.push(Button {
                x,
                y: BUTTON_TOP,
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
                command,
            });
        }
    }

    fn draw_tasks(&mut self, tasks: &[Task], now: NaiveTime) {
        for (i, task) in tasks.iter().enumerate() {
            self.ops.push(DrawOp::Text {
                x: ROW_LEFT,
                y: ROW_TOP - i as f64 * ROW_STEP,
                text: task.row_label(i + 1),
                color: row_color(task, now),
                align: Align::Left,
                bold: false,
            });
        }
    }

    /// Text drawn for task rows, top to bottom, with their colours.
    #[cfg(test)]
    pub fn rows(&self) -> Vec<(&str, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, color, align: Align::Left, .. } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect()
    }
}

/// Priority colour, overridden by the overdue colour for open tasks past their reminder.
pub fn row_color(task: &Task, now: NaiveTime) -> Color {
    if task.is_overdue(now) {
        OVERDUE
    } else {
        colors::priority_color(task.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::tui::colors::{HIGH, LOW, MEDIUM};
    use crate::tui::router::route;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_buttons_are_centred_as_a_group() {
        let scene = Scene::build(&[], noon());
        let xs: Vec<f64> = scene.buttons.iter().map(|b| b.x).collect();
        assert_eq!(xs, [-390.0, -230.0, -70.0, 90.0, 250.0]);
        assert!(scene.buttons.iter().all(|b| b.y == 150.0 && b.height == 40.0));
        let labels: Vec<_> = scene.buttons.iter().map(|b| b.command.label()).collect();
        assert_eq!(
            labels,
            ["Add Task", "Complete Task", "Delete Task", "Edit Task", "Clear Completed"]
        );
    }

    #[test]
    fn test_header_comes_first() {
        let scene = Scene::build(&[], noon());
        match &scene.ops[0] {
            DrawOp::Text { text, align, bold, .. } => {
                assert_eq!(text, TITLE);
                assert_eq!(*align, Align::Center);
                assert!(*bold);
            }
            other => panic!("unexpected first op {other:?}"),
        }
    }

    #[test]
    fn test_rows_follow_list_order_with_priority_colours() {
        let tasks = vec![
            Task::new("low", Priority::Low, None),
            Task::new("mid", Priority::Medium, None),
            Task::new("high", Priority::High, None),
        ];
        let scene = Scene::build(&tasks, noon());
        assert_eq!(
            scene.rows(),
            [
                ("1. [✗] [L] low", LOW),
                ("2. [✗] [M] mid", MEDIUM),
                ("3. [✗] [H] high", HIGH),
            ]
        );
    }

    #[test]
    fn test_overdue_overrides_priority_for_open_tasks_only() {
        let mut done = Task::new("done", Priority::High, Some("09:00".to_string()));
        done.done = true;
        let tasks = vec![
            Task::new("late", Priority::High, Some("09:00".to_string())),
            done,
            Task::new("later", Priority::Low, Some("18:00".to_string())),
        ];
        let colors: Vec<Color> = Scene::build(&tasks, noon()).rows().iter().map(|r| r.1).collect();
        assert_eq!(colors, [OVERDUE, HIGH, LOW]);
    }

    #[test]
    fn test_click_outside_buttons_routes_nowhere() {
        let scene = Scene::build(&[], noon());
        assert_eq!(route(&scene.buttons, 0.0, 0.0), None);
        assert_eq!(route(&scene.buttons, -395.0, 130.0), None);
        assert_eq!(route(&scene.buttons, -240.0, 130.0), None);
        assert_eq!(route(&scene.buttons, -320.0, 130.0), Some(Command::Add));
        assert_eq!(route(&scene.buttons, 389.0, 111.0), Some(Command::ClearCompleted));
    }
}
