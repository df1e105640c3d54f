use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire engine.
pub type Result<T> = std::result::Result<T, EngineErr>;

/// The engine's error type.
///
/// Arithmetic never produces one of these: divergent runs yield infinities or
/// NaN inside the trajectory instead.
#[derive(Debug)]
pub enum EngineErr {
    /// The noise standard deviation is negative or not finite.
    InvalidDispersion { got: f64 },
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for EngineErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineErr::InvalidDispersion { got } => {
                write!(f, "invalid dispersion {got}, expected a finite value >= 0")
            }
            EngineErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(f, "size mismatch for {what}: got {got}, expected {expected}"),
            EngineErr::Io(e) => write!(f, "io error: {e}"),
            EngineErr::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl Error for EngineErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineErr::Io(e) => Some(e),
            EngineErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for EngineErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

