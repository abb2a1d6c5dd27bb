//! Painting a `Scene` into a terminal buffer.
//!
//! The 800 x 550 canvas is stretched over the target area. Each cell stands
//! for the canvas point at its centre, which is also the point a click on that
//! cell reports, so what looks like a button is exactly what hit-tests as one.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::tui::colors::BACKGROUND;
use crate::tui::scene::{Align, DrawOp, Scene, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Distance from a text anchor (its baseline) up to the middle of the glyphs.
const TEXT_RISE: f64 = 8.0;

/// Maps between canvas units and terminal cells for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Viewport { area }
    }

    /// The cell covering canvas point `(x, y)`, if it lies inside the area.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let (w, h) = (self.area.width as f64, self.area.height as f64);
        let fx = (x + CANVAS_WIDTH / 2.0) / CANVAS_WIDTH * w;
        let fy = (CANVAS_HEIGHT / 2.0 - y) / CANVAS_HEIGHT * h;
        if !(0.0..w).contains(&fx) || !(0.0..h).contains(&fy) {
            return None;
        }
        Some((self.area.x + fx as u16, self.area.y + fy as u16))
    }

    /// The canvas point at the centre of cell `(column, row)`.
    pub fn point_at(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let (w, h) = (self.area.width as f64, self.area.height as f64);
        let x = ((column - self.area.x) as f64 + 0.5) / w * CANVAS_WIDTH - CANVAS_WIDTH / 2.0;
        let y = CANVAS_HEIGHT / 2.0 - ((row - self.area.y) as f64 + 0.5) / h * CANVAS_HEIGHT;
        Some((x, y))
    }
}

/// Widget that paints a scene over the whole area.
pub struct Surface<'a> {
    scene: &'a Scene,
}

impl<'a> Surface<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Surface { scene }
    }
}

impl Widget for Surface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(BACKGROUND));
        let viewport = Viewport::new(area);

        for op in &self.scene.ops {
            match op {
                DrawOp::Fill { x, y, width, height, color } => {
                    for row in area.top()..area.bottom() {
                        for column in area.left()..area.right() {
                            let Some((px, py)) = viewport.point_at(column, row) else {
                                continue;
                            };
                            let inside = *x <= px && px <= x + width && y - height <= py && py <= *y;
                            if inside {
                                if let Some(cell) = buf.cell_mut((column, row)) {
                                    cell.set_bg(*color);
                                }
                            }
                        }
                    }
                }
                DrawOp::Text { x, y, text, color, align, bold } => {
                    let Some((column, row)) = viewport.cell_at(*x, y + TEXT_RISE) else {
                        continue;
                    };
                    let width = Span::raw(text.as_str()).width() as u16;
                    let start = match align {
                        Align::Left => column,
                        Align::Center => column.saturating_sub(width / 2).max(area.left()),
                    };
                    let mut style = Style::default().fg(*color);
                    if *bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    let room = area.right().saturating_sub(start) as usize;
                    buf.set_stringn(start, row, text, room, style);
                }
            }
        }
    }
}
