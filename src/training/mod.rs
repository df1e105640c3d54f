mod engine;
mod trajectory;

pub use engine::{DegenerateReason, FitOutcome, FitReport, GradientEngine, fit};
pub use trajectory::Trajectory;
