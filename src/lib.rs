//! Single-variable linear regression fitted by gradient descent.
//!
//! [`fit`] generates noisy samples of a known line and descends the squared
//! loss from `a = 1, b = 0`, recording the error, both parameters and both
//! gradient components once per iteration.

pub mod arch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod optimization;
pub mod training;

pub use arch::LinearParams;
pub use config::RunConfig;
pub use dataset::SampleSet;
pub use error::{EngineErr, Result};
pub use training::{DegenerateReason, FitOutcome, FitReport, GradientEngine, Trajectory, fit};
