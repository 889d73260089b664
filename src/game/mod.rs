use log::{debug, info};
use rand::Rng;

use crate::apple::Apple;
use crate::basic::GridPoint;
use crate::config::Config;
use crate::keyboard_control::Control;
use crate::snake::Snake;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Running,
    /// The snake crashed or the player quit, nothing advances anymore
    Terminated,
}

/// What a single tick did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    Moved(GridPoint),
    Ate(GridPoint),
    Crashed(GridPoint),
}

/// The rules of the game, free of any windowing or drawing
pub struct Game<R: Rng> {
    snake: Snake,
    apple: Apple,
    state: State,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &Config, mut rng: R) -> Self {
        let board_dim = config.board_dim();
        let snake = Snake::new(board_dim, config.snake_color);
        let apple = Apple::new(&snake.body, board_dim, config.apple_color, &mut rng);
        Self {
            snake,
            apple,
            state: State::Running,
            rng,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Input arriving between two ticks, only the latest
    /// valid turn survives until the next tick
    pub fn control(&mut self, control: Control) {
        if self.state == State::Terminated {
            return;
        }
        match control {
            Control::Turn(dir) => self.snake.queue_dir(dir),
            Control::Quit => {
                info!("quit requested at length {}", self.snake.body.len());
                self.state = State::Terminated;
            }
        }
    }

    /// Advance the game by one step, `None` once terminated
    pub fn tick(&mut self) -> Option<Tick> {
        if self.state == State::Terminated {
            return None;
        }

        self.snake.update_dir();
        let head = self.snake.advance();

        if self.snake.check_collision() {
            info!("game over, crashed at {:?} with length {}", head, self.snake.body.len());
            self.state = State::Terminated;
            return Some(Tick::Crashed(head));
        }

        if head == self.apple.pos {
            self.snake.grow();
            debug!("ate apple at {:?}, growing to {}", head, self.snake.target_len());
            self.apple.randomize_position(&self.snake.body, &mut self.rng);
            return Some(Tick::Ate(head));
        }

        Some(Tick::Moved(head))
    }
}
