use ggez::{
    graphics::{Mesh, MeshBuilder},
    Context,
};

use crate::{
    apple::Apple,
    config::Config,
    error::{ErrorConversion, Result},
    rendering::{CellPainter, Drawable, MeshPainter},
    snake::Snake,
};

pub fn frame_mesh(snake: &Snake, apple: &Apple, config: &Config, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    let mut painter = MeshPainter::new(&mut builder, config);
    paint_frame(snake, apple, &mut painter).with_trace_step("frame_mesh")?;

    Ok(Mesh::from_data(ctx, builder.build()))
}

/// The cell the tail gave up is erased first so that anything
/// now standing on it (the head or a fresh apple) is painted over it
fn paint_frame(snake: &Snake, apple: &Apple, painter: &mut impl CellPainter) -> Result {
    if let Some(cell) = snake.vacated() {
        painter.erase_cell(cell)?;
    }
    apple.draw(painter)?;
    snake.draw(painter)
}
