use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::{Game, State, Tick};
use crate::keyboard_control::Controls;
use crate::rendering::frame_mesh;

/// Glue between the game rules and the ggez event loop
pub struct App {
    config: Config,
    controls: Controls,
    game: Game<StdRng>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let game = Game::new(&config, rng);
        Self {
            config,
            controls: Controls::default(),
            game,
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        // key events queued since the last frame have already
        // been delivered, so each tick sees at most one turn
        while ctx.time.check_update_time(self.config.tps) {
            match self.game.tick() {
                Some(Tick::Moved(head)) => trace!("head at {:?}", head),
                Some(Tick::Ate(head)) => {
                    info!("ate apple at {:?}, score {}", head, self.game.snake().target_len() - 1)
                }
                Some(Tick::Crashed(_)) | None => break,
            }
        }

        if self.game.state() == State::Terminated {
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, *self.config.background_color);

        let mesh = frame_mesh(self.game.snake(), self.game.apple(), &self.config, ctx)
            .with_trace_step("App::draw")?;
        canvas.draw(&mesh, DrawParam::default());

        canvas
            .finish(ctx)
            .map_err(Error::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        if let Some(control) = input.keycode.and_then(|key| self.controls.control_for(key)) {
            self.game.control(control);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        info!("exiting with snake length {}", self.game.snake().body.len());
        // false lets ggez close the window and exit
        Ok(false)
    }
}
