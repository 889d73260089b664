use ggez::graphics::{DrawMode, MeshBuilder, Rect};

use crate::basic::GridPoint;
use crate::color::Color;
use crate::config::Config;
use crate::error::{Error, ErrorConversion, Result};

/// Width of the outline drawn around every cell
const BORDER_WIDTH: f32 = 1.;

pub trait CellPainter {
    /// Fill the cell with `color` and outline it with the border color
    fn paint_cell(&mut self, pos: GridPoint, color: Color) -> Result;

    /// Fill the cell with the background color, no outline
    fn erase_cell(&mut self, pos: GridPoint) -> Result;
}

/// Accumulates cells into a single mesh, drawn once per frame
pub struct MeshPainter<'a> {
    builder: &'a mut MeshBuilder,
    cell_side: f32,
    border_color: Color,
    background_color: Color,
}

impl<'a> MeshPainter<'a> {
    pub fn new(builder: &'a mut MeshBuilder, config: &Config) -> Self {
        Self {
            builder,
            cell_side: config.cell_side(),
            border_color: config.border_color,
            background_color: config.background_color,
        }
    }

    fn cell_rect(&self, pos: GridPoint) -> Rect {
        let dest = pos.to_point(self.cell_side);
        Rect::new(dest.x, dest.y, self.cell_side, self.cell_side)
    }
}

impl CellPainter for MeshPainter<'_> {
    fn paint_cell(&mut self, pos: GridPoint, color: Color) -> Result {
        let rect = self.cell_rect(pos);
        // a stroke is centered on the outline, keep it inside the cell
        let half = BORDER_WIDTH / 2.;
        let outline = Rect::new(
            rect.x + half,
            rect.y + half,
            rect.w - BORDER_WIDTH,
            rect.h - BORDER_WIDTH,
        );

        self.builder
            .rectangle(DrawMode::fill(), rect, *color)
            .and_then(|builder| builder.rectangle(DrawMode::stroke(BORDER_WIDTH), outline, *self.border_color))
            .map(|_| ())
            .map_err(Error::from)
            .with_trace_step("MeshPainter::paint_cell")
    }

    fn erase_cell(&mut self, pos: GridPoint) -> Result {
        let rect = self.cell_rect(pos);
        self.builder
            .rectangle(DrawMode::fill(), rect, *self.background_color)
            .map(|_| ())
            .map_err(Error::from)
            .with_trace_step("MeshPainter::erase_cell")
    }
}
