#[macro_use]
extern crate derive_more;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;
use log::{error, info};

use crate::app::App;
use crate::config::Config;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod color;
mod config;
mod error;
mod game;
mod keyboard_control;
mod rendering;
mod snake;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wrapping grid")]
struct Cli {
    /// Game updates per second
    #[arg(long, default_value_t = config::TICKS_PER_SECOND)]
    tps: u32,

    /// Seed for apple placement, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = start(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn start(cli: Cli) -> Result {
    let config = Config::default()
        .tps(cli.tps)
        .seed(cli.seed)
        .validate()
        .with_trace_step("start")?;

    info!(
        "starting on a {:?} board at {} ticks per second",
        config.board_dim(),
        config.tps,
    );

    let wm = WindowMode::default()
        .dimensions(config.screen_width as f32, config.screen_height as f32)
        .resizable(false);
    let ws = WindowSetup::default().title(&config.title).vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Error::from)
        .with_trace_step("start")?;

    let app = App::new(config);
    run(ctx, event_loop, app)
}
