use log::{debug, warn};
use rand::Rng;

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::{GridDim, GridPoint};
use crate::color::Color;
use crate::rendering::Drawable;

pub struct Apple {
    pub pos: GridPoint,
    board_dim: GridDim,
    color: Color,
}

impl Apple {
    /// Plain rejection sampling gives up after this many hits on
    /// occupied cells and samples the free cells directly instead
    pub const MAX_ATTEMPTS: usize = 64;

    pub fn new<'a, O>(occupied: O, board_dim: GridDim, color: Color, rng: &mut impl Rng) -> Self
    where
        O: IntoIterator<Item = &'a GridPoint> + Copy,
    {
        let mut apple = Self {
            pos: GridPoint::ORIGIN,
            board_dim,
            color,
        };
        apple.randomize_position(occupied, rng);
        apple
    }

    /// Move to a uniformly random cell not in `occupied`. Returns false and
    /// stays put only when every cell on the board is occupied.
    pub fn randomize_position<'a, O>(&mut self, occupied: O, rng: &mut impl Rng) -> bool
    where
        O: IntoIterator<Item = &'a GridPoint> + Copy,
    {
        let is_free = |pos: GridPoint| !occupied.into_iter().any(|&cell| cell == pos);

        for _ in 0..Self::MAX_ATTEMPTS {
            let pos = GridPoint {
                x: rng.gen_range(0..self.board_dim.x),
                y: rng.gen_range(0..self.board_dim.y),
            };
            if is_free(pos) {
                debug!("apple moved to {:?}", pos);
                self.pos = pos;
                return true;
            }
        }

        warn!(
            "no free cell after {} attempts, sampling free cells directly",
            Self::MAX_ATTEMPTS,
        );
        let occupied_cells = get_occupied_cells(occupied);
        match random_free_spot(&occupied_cells, self.board_dim, rng) {
            Some(pos) => {
                debug!("apple moved to {:?}", pos);
                self.pos = pos;
                true
            }
            None => {
                warn!("no space left for the apple, it stays at {:?}", self.pos);
                false
            }
        }
    }
}

impl Drawable for Apple {
    fn color(&self) -> Color {
        self.color
    }

    fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        std::iter::once(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rendering::test_painter::{RecordingPainter, Stroke};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BOARD: GridDim = GridPoint { x: 8, y: 6 };
    const NOTHING: [GridPoint; 0] = [];

    fn all_cells() -> Vec<GridPoint> {
        (0..BOARD.area()).map(|i| BOARD.from_index(i)).collect()
    }

    #[test]
    fn test_new_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = [GridPoint::ORIGIN];
        for _ in 0..100 {
            let apple = Apple::new(&snake, BOARD, Color::RED, &mut rng);
            assert_ne!(apple.pos, GridPoint::ORIGIN);
            assert!(BOARD.contains(apple.pos));
        }
    }

    #[test]
    fn test_last_free_cell_is_found() {
        // whether rejection sampling or the fallback finds
        // it, the single hole is the only answer
        let mut rng = StdRng::seed_from_u64(2);
        let hole = GridPoint { x: 5, y: 3 };
        let occupied: Vec<_> = all_cells().into_iter().filter(|&p| p != hole).collect();

        let mut apple = Apple::new(&NOTHING, BOARD, Color::RED, &mut rng);
        assert!(apple.randomize_position(&occupied, &mut rng));
        assert_eq!(apple.pos, hole);
    }

    #[test]
    fn test_full_board_keeps_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::new(&NOTHING, BOARD, Color::RED, &mut rng);
        let before = apple.pos;

        assert!(!apple.randomize_position(&all_cells(), &mut rng));
        assert_eq!(apple.pos, before);
    }

    #[test]
    fn test_draw_single_cell() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(4);
        let apple = Apple::new(&NOTHING, config.board_dim(), config.apple_color, &mut rng);

        let mut painter = RecordingPainter::default();
        apple.draw(&mut painter).unwrap();
        assert_eq!(painter.strokes, vec![Stroke::Paint(apple.pos, config.apple_color)]);
    }

    proptest! {
        #[test]
        fn never_lands_on_occupied(
            seed in any::<u64>(),
            occupied in prop::collection::vec((0..BOARD.x, 0..BOARD.y), 0..BOARD.area()),
        ) {
            let occupied: Vec<_> = occupied.into_iter().map(|(x, y)| GridPoint { x, y }).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut apple = Apple::new(&NOTHING, BOARD, Color::RED, &mut rng);

            // with fewer entries than cells there's always a free cell
            prop_assert!(apple.randomize_position(&occupied, &mut rng));
            prop_assert!(BOARD.contains(apple.pos));
            prop_assert!(!occupied.contains(&apple.pos));
        }
    }
}
