use static_assertions::const_assert_eq;

use crate::basic::GridDim;
use crate::color::Color;
use crate::error::{ConfigError, Result};

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
pub const CELL_SIZE: u32 = 20;
/// Game updates per second
pub const TICKS_PER_SECOND: u32 = 20;

// the board has to be a whole number of cells
const_assert_eq!(SCREEN_WIDTH % CELL_SIZE, 0);
const_assert_eq!(SCREEN_HEIGHT % CELL_SIZE, 0);

/// Everything that stays fixed for the whole session, built
/// once at startup and handed out by reference
#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,

    /// Window size in pixels
    pub screen_width: u32,
    pub screen_height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
    pub tps: u32,

    pub background_color: Color,
    pub border_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,

    /// Fixed seed for a reproducible apple sequence
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            tps: TICKS_PER_SECOND,

            background_color: Color::BLACK,
            border_color: Color::from_rgb(93, 216, 228),
            apple_color: Color::RED,
            snake_color: Color::GREEN,

            seed: None,
        }
    }
}

// builder
impl Config {
    pub fn tps(mut self, tps: u32) -> Self {
        self.tps = tps;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[cfg(test)]
    pub fn screen_size(mut self, width: u32, height: u32, cell_size: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self.cell_size = cell_size;
        self
    }
}

impl Config {
    pub fn validate(self) -> Result<Self> {
        let (width, height, cell_size) = (self.screen_width, self.screen_height, self.cell_size);
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize.into());
        }
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyScreen { width, height }.into());
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(ConfigError::PartialCells { width, height, cell_size }.into());
        }
        if self.tps == 0 {
            return Err(ConfigError::ZeroTickRate.into());
        }
        Ok(self)
    }

    /// Size of the board in cells
    pub fn board_dim(&self) -> GridDim {
        GridDim {
            x: (self.screen_width / self.cell_size) as isize,
            y: (self.screen_height / self.cell_size) as isize,
        }
    }

    pub fn cell_side(&self) -> f32 {
        self.cell_size as f32
    }
}
