/// ASCII rasterizer for projected frames
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use fov3d_core::{Frame, ProjectedPoint};
use std::io::Write;

/// Node characters by apparent size (farthest to closest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '+', '*', '#', '%', '@'];

const CENTER_MARK: char = 'X';

/// Character grid that projected frames are drawn onto
pub struct Canvas {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.char_buffer[y * self.width + x])
    }

    fn plot(&mut self, x: i64, y: i64, character: char) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.char_buffer[y as usize * self.width + x as usize] = character;
        }
    }

    /// Cell holding a normalized screen position; the far edges fall in the
    /// last row/column
    fn cell(&self, point: &ProjectedPoint) -> (i64, i64) {
        let (x, y) = point.to_pixels(self.width as u32, self.height as u32);
        let x = (x.floor() as i64).min(self.width as i64 - 1);
        let y = (y.floor() as i64).min(self.height as i64 - 1);
        (x, y)
    }

    /// Bresenham line between two cells, drawn with a slope-dependent character
    pub fn draw_line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let character = if dy == 0 {
            '-'
        } else if dx == 0 || -dy > 2 * dx {
            '|'
        } else if dx > -2 * dy {
            '-'
        } else if sx == sy {
            '\\'
        } else {
            '/'
        };

        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.plot(x, y, character);
            if x == x1 && y == y1 {
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
    }

    /// Plot a node, brighter the closer it is
    /// Draw a node, `nearness` running from 0 (farthest node of the frame)
    /// to 1 (closest)
    pub fn plot_node(&mut self, node: &ProjectedPoint, nearness: f64) {
        let (x, y) = self.cell(node);
        self.plot(x, y, node_char(nearness));
    }

    pub fn plot_center(&mut self, center: &ProjectedPoint) {
        let (x, y) = self.cell(center);
        self.plot(x, y, CENTER_MARK);
    }

    /// Draw edges, then nodes over them, then the graph center
    pub fn render_frame(&mut self, frame: &Frame) {
        for segment in &frame.segments {
            let from = self.cell(&segment.source);
            let to = self.cell(&segment.target);
            self.draw_line(from, to);
        }
        let (smallest, largest) = frame
            .nodes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), node| {
                (lo.min(node.size), hi.max(node.size))
            });
        for node in &frame.nodes {
            self.plot_node(node, nearness(node.size, smallest, largest));
        }
        if let Some(center) = &frame.center {
            self.plot_center(center);
        }
    }

    /// Rows of the canvas, without trailing spaces
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.char_buffer.chunks(self.width.max(1)) {
            let line: String = row.iter().collect();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    CENTER_MARK => Color::Red,
                    '-' | '|' | '/' | '\\' => Color::Grey,
                    '.' | ':' => Color::DarkGrey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Position of `size` between the smallest and largest node of a frame.
/// A frame whose nodes all look alike shows them at full brightness.
fn nearness(size: f64, smallest: f64, largest: f64) -> f64 {
    let span = largest - smallest;
    if span > 0.0 {
        (size - smallest) / span
    } else {
        1.0
    }
}

fn node_char(nearness: f64) -> char {
    let index = (nearness.clamp(0.0, 1.0) * (LUMINOSITY_RAMP.len() - 1) as f64).round() as usize;
    LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
}
