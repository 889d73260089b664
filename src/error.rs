use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    Config(ConfigError),
}

/// Reasons a configuration can't describe a playable board
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    ZeroCellSize,
    EmptyScreen { width: u32, height: u32 },
    PartialCells { width: u32, height: u32, cell_size: u32 },
    ZeroTickRate,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match *self {
            ZeroCellSize => write!(f, "cell size must be positive"),
            EmptyScreen { width, height } => write!(f, "screen {}x{} has no cells", width, height),
            PartialCells { width, height, cell_size } => write!(
                f,
                "screen {}x{} is not a whole number of {}px cells",
                width, height, cell_size,
            ),
            ZeroTickRate => write!(f, "tick rate must be positive"),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self(ErrorType::Config(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    #[cfg(test)]
    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorType::GameError(e) => writeln!(f, "Error:\n{:?}\nTrace:", e)?,
            ErrorType::Config(e) => writeln!(f, "Invalid config: {}\nTrace:", e)?,
        }
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
