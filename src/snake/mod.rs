use std::collections::VecDeque;

use log::trace;

use crate::basic::{Dir, GridDim, GridPoint};
use crate::color::Color;
use crate::rendering::Drawable;

pub struct Snake {
    /// Occupied cells, head at the front
    pub body: VecDeque<GridPoint>,

    /// Direction the snake is currently going
    pub dir: Dir,

    /// Latest valid direction requested since the last tick,
    /// applied once by `update_dir`
    next_dir: Option<Dir>,

    /// Length the body is allowed to reach, grows by one
    /// per apple and is caught up with lazily
    len: usize,

    /// Cell given up by the tail during the last `advance`,
    /// erased before the next frame is painted
    vacated: Option<GridPoint>,

    board_dim: GridDim,
    color: Color,
}

impl Snake {
    pub const START_POS: GridPoint = GridPoint::ORIGIN;
    pub const START_DIR: Dir = Dir::R;

    pub fn new(board_dim: GridDim, color: Color) -> Self {
        let mut snake = Self {
            // a body can never be longer than the board
            body: VecDeque::with_capacity(board_dim.area() + 1),
            dir: Self::START_DIR,
            next_dir: None,
            len: 1,
            vacated: None,
            board_dim,
            color,
        };
        snake.reset();
        snake
    }

    /// Single segment in the top-left corner going right
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(Self::START_POS);
        self.dir = Self::START_DIR;
        self.next_dir = None;
        self.len = 1;
        self.vacated = None;
    }

    pub fn head(&self) -> GridPoint {
        self.body[0]
    }

    /// Length the body will have once it catches up with growth
    pub fn target_len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn next_dir(&self) -> Option<Dir> {
        self.next_dir
    }

    pub fn vacated(&self) -> Option<GridPoint> {
        self.vacated
    }

    /// Buffer a direction for the next tick, the latest call wins.
    /// Reversing straight into the body is ignored.
    pub fn queue_dir(&mut self, dir: Dir) {
        if self.dir.is_opposite(dir) {
            trace!("ignoring reversal from {:?} to {:?}", self.dir, dir);
            return;
        }
        self.next_dir = Some(dir);
    }

    pub fn update_dir(&mut self) {
        if let Some(dir) = self.next_dir.take() {
            if dir != self.dir {
                trace!("turning from {:?} to {:?}", self.dir, dir);
            }
            self.dir = dir;
        }
    }

    /// Move one cell forward, wrapping around the board edges,
    /// returns the new head
    pub fn advance(&mut self) -> GridPoint {
        let new_head = self.head().wrapping_translate(self.dir, 1, self.board_dim);
        self.body.push_front(new_head);

        self.vacated = if self.body.len() > self.len {
            self.body.pop_back()
        } else {
            None
        };

        new_head
    }

    /// Takes effect on the next `advance`, which skips the tail trim
    pub fn grow(&mut self) {
        self.len += 1;
    }

    /// Whether the head overlaps any other segment
    pub fn check_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

impl Drawable for Snake {
    fn color(&self) -> Color {
        self.color
    }

    fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.body.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rendering::test_painter::{RecordingPainter, Stroke};
    use proptest::prelude::*;
    use Dir::*;

    fn snake() -> Snake {
        let config = Config::default();
        Snake::new(config.board_dim(), config.snake_color)
    }

    fn tick(snake: &mut Snake) -> GridPoint {
        snake.update_dir();
        snake.advance()
    }

    #[test]
    fn test_reset() {
        let mut snake = snake();
        snake.grow();
        snake.queue_dir(D);
        tick(&mut snake);
        tick(&mut snake);

        snake.reset();
        assert_eq!(snake.body, [GridPoint::ORIGIN]);
        assert_eq!(snake.dir, R);
        assert_eq!(snake.next_dir(), None);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.vacated(), None);
        assert_eq!(snake.color(), Config::default().snake_color);
    }

    #[test]
    fn test_wraps_around_right_edge() {
        let config = Config::default();
        let mut snake = snake();

        for _ in 0..31 {
            tick(&mut snake);
        }
        assert_eq!(snake.head().to_point(config.cell_side()).x, 620.);

        // 32 * 20 mod 640 == 0
        let head = tick(&mut snake);
        assert_eq!(head, GridPoint::ORIGIN);
        assert_eq!(snake.head().to_point(config.cell_side()).x, 0.);
        assert_eq!(snake.body.len(), 1);
    }

    #[test]
    fn test_growth_is_lazy() {
        let mut snake = snake();
        // eats an apple lying on its head
        snake.grow();
        assert_eq!(snake.target_len(), 2);
        assert_eq!(snake.body.len(), 1);

        tick(&mut snake);
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.vacated(), None);

        tick(&mut snake);
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.vacated(), Some(GridPoint { x: 0, y: 0 }));
    }

    #[test]
    fn test_direction_kept_without_input() {
        let mut snake = snake();
        snake.queue_dir(D);
        tick(&mut snake);
        for _ in 0..5 {
            tick(&mut snake);
            assert_eq!(snake.dir, D);
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = snake();
        snake.queue_dir(L);
        assert_eq!(snake.next_dir(), None);

        tick(&mut snake);
        assert_eq!(snake.dir, R);
        assert_eq!(snake.head(), GridPoint { x: 1, y: 0 });
    }

    #[test]
    fn test_latest_direction_wins() {
        let mut snake = snake();
        // both are valid relative to the current direction
        snake.queue_dir(U);
        snake.queue_dir(D);
        assert_eq!(snake.next_dir(), Some(D));

        tick(&mut snake);
        assert_eq!(snake.dir, D);
        assert_eq!(snake.next_dir(), None);
    }

    #[test]
    fn test_reversal_does_not_clear_buffered_turn() {
        let mut snake = snake();
        snake.queue_dir(U);
        // still going right, so left is a reversal
        snake.queue_dir(L);
        assert_eq!(snake.next_dir(), Some(U));

        tick(&mut snake);
        assert_eq!(snake.dir, U);
    }

    // turn in a tight square: right, down, left, up
    fn loop_around(snake: &mut Snake) -> bool {
        for dir in [R, D, L, U] {
            snake.queue_dir(dir);
            tick(snake);
        }
        snake.check_collision()
    }

    #[test]
    fn test_self_collision() {
        let mut snake = snake();
        for _ in 0..4 {
            snake.grow();
        }
        assert!(loop_around(&mut snake));
    }

    #[test]
    fn test_chasing_own_tail_is_fine() {
        let mut snake = snake();
        for _ in 0..3 {
            snake.grow();
        }
        assert!(!loop_around(&mut snake));
        // the head took the cell the tail just left
        assert_eq!(snake.vacated(), Some(snake.head()));
    }

    #[test]
    fn test_draw_paints_body_head_first() {
        let config = Config::default();
        let mut snake = snake();
        snake.grow();
        tick(&mut snake);
        tick(&mut snake);

        let mut painter = RecordingPainter::default();
        snake.draw(&mut painter).unwrap();
        // the tail cell is left to the frame, the snake only paints itself
        assert_eq!(
            painter.strokes,
            vec![
                Stroke::Paint(GridPoint { x: 2, y: 0 }, config.snake_color),
                Stroke::Paint(GridPoint { x: 1, y: 0 }, config.snake_color),
            ],
        );
    }

    proptest! {
        #[test]
        fn head_follows_direction(turns in prop::collection::vec(prop::option::of(0u8..4), 1..200)) {
            let board_dim = Config::default().board_dim();
            let mut snake = snake();
            for (i, turn) in turns.into_iter().enumerate() {
                if i % 7 == 0 {
                    snake.grow();
                }
                if let Some(d) = turn {
                    snake.queue_dir(Dir::from(d));
                }

                let dir_before = snake.dir;
                let old_head = snake.head();
                let had_turn = snake.next_dir().is_some();
                snake.update_dir();
                if !had_turn {
                    prop_assert_eq!(snake.dir, dir_before);
                }
                prop_assert!(!snake.dir.is_opposite(dir_before));

                let new_head = snake.advance();
                let (dx, dy) = snake.dir.delta();
                prop_assert_eq!(new_head.x, (old_head.x + dx).rem_euclid(board_dim.x));
                prop_assert_eq!(new_head.y, (old_head.y + dy).rem_euclid(board_dim.y));
                prop_assert!(snake.body.len() <= snake.target_len());

                let overlaps = snake.body.iter().skip(1).any(|&p| p == new_head);
                prop_assert_eq!(snake.check_collision(), overlaps);
            }
        }
    }
}
