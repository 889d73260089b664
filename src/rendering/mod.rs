pub use cell_painter::{CellPainter, MeshPainter};
pub use frame_mesh::frame_mesh;

mod cell_painter;
mod frame_mesh;

use crate::basic::GridPoint;
use crate::color::Color;
use crate::error::Result;

/// Anything that occupies cells on the board and is
/// drawn as a set of uniformly colored cells
pub trait Drawable {
    fn color(&self) -> Color;

    fn cells(&self) -> impl Iterator<Item = GridPoint> + '_;

    fn draw(&self, painter: &mut impl CellPainter) -> Result {
        let color = self.color();
        for cell in self.cells() {
            painter.paint_cell(cell, color)?;
        }
        Ok(())
    }
}
