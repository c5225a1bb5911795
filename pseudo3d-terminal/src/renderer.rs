/// Character-cell line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use pseudo3d_core::{LineStyle, Offset, Rgb, ScreenLine};
use std::io::Write;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;

/// Screen units per terminal column
const UNITS_PER_COLUMN: f32 = 8.0;

/// Lines reaching further than this many cells are not rasterized
const MAX_CELL: f32 = 10_000.0;

/// Character used for grid lines
const GRID_CHAR: char = '.';
/// Character used for axis lines
const AXIS_CHAR: char = '#';

/// Renders projected lines into a buffer of colored characters
pub struct LineRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl LineRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Map a screen offset to a (column, row) cell around the buffer center
    pub fn to_cell(&self, offset: Offset) -> Option<(i64, i64)> {
        let col = offset.x / UNITS_PER_COLUMN + self.width as f32 / 2.0;
        let row = offset.y * CELL_ASPECT / UNITS_PER_COLUMN + self.height as f32 / 2.0;
        if !(col.is_finite() && row.is_finite()) || col.abs() > MAX_CELL || row.abs() > MAX_CELL
        {
            return None;
        }
        Some((col.round() as i64, row.round() as i64))
    }

    pub fn render_lines(&mut self, lines: &[ScreenLine]) {
        for line in lines {
            self.render_line(line);
        }
    }

    fn render_line(&mut self, line: &ScreenLine) {
        // Lines blown up by the perspective singularity are skipped
        let (Some(start), Some(end)) = (self.to_cell(line.start), self.to_cell(line.end)) else {
            return;
        };

        let (character, color) = match line.style {
            LineStyle::Grid => (GRID_CHAR, Color::DarkGrey),
            LineStyle::Axis { color, .. } => (AXIS_CHAR, to_color(color)),
        };

        for (x, y) in bresenham(start, end) {
            self.plot(x, y, character, color);
        }

        if let LineStyle::Axis { color, label, .. } = line.style {
            for (i, c) in label.chars().enumerate() {
                self.plot(end.0 + 1 + i as i64, end.1 - 1, c, to_color(color));
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64, character: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = character;
        self.color_buffer[idx] = color;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Integer cells on the line from `start` to `end`, both inclusive
pub fn bresenham(start: (i64, i64), end: (i64, i64)) -> Vec<(i64, i64)> {
    let (mut x, mut y) = start;
    let dx = (end.0 - x).abs();
    let dy = -(end.1 - y).abs();
    let sx = if x < end.0 { 1 } else { -1 };
    let sy = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cells = Vec::with_capacity((dx - dy + 1) as usize);

    loop {
        cells.push((x, y));
        if x == end.0 && y == end.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    cells
}
