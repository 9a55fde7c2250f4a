//! Starfield background widget.

use crate::starfield::StarSprite;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

/// Draws star sprites onto the terminal grid.
///
/// Sprite coordinates are canvas pixels; each terminal cell covers
/// `cell_width` x `cell_height` of them.
#[derive(Debug, Clone, Copy)]
pub struct Stars<'a> {
    sprites: &'a [StarSprite],
    cell_width: f64,
    cell_height: f64,
}

impl<'a> Stars<'a> {
    /// Creates the widget.
    pub fn new(sprites: &'a [StarSprite], cell_width: f64, cell_height: f64) -> Self {
        Self {
            sprites,
            cell_width,
            cell_height,
        }
    }
}

/// Glyph for a stroke width: distant stars are dots, close ones are stars.
fn glyph(width: f64) -> char {
    if width < 1.5 {
        '.'
    } else if width < 3.0 {
        '+'
    } else {
        '*'
    }
}

fn shade(alpha: f64) -> Color {
    if alpha < 0.65 {
        Color::DarkGray
    } else if alpha < 0.85 {
        Color::Gray
    } else {
        Color::White
    }
}

impl Widget for Stars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for sprite in self.sprites {
            if sprite.x < 0.0 || sprite.y < 0.0 {
                continue;
            }
            let col = (sprite.x / self.cell_width) as u16;
            let row = (sprite.y / self.cell_height) as u16;
            if col >= area.width || row >= area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(glyph(sprite.width)).set_fg(shade(sprite.alpha));
            }
        }
    }
}
