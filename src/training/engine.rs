use std::fmt;

use log::{info, trace, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::Trajectory;
use crate::{
    LinearParams, Result, RunConfig, SampleSet,
    arch::{grad_a, grad_b, linear_model, squared_loss},
    optimization::{GradientDescent, Optimizer},
};

/// Why a run produced no trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateReason {
    EmptySampleSet,
    NoIterations,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::EmptySampleSet => f.write_str("the sample set is empty"),
            DegenerateReason::NoIterations => f.write_str("zero iterations were requested"),
        }
    }
}

/// The output of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub samples: SampleSet,
    pub trajectory: Trajectory,
    /// Parameters after the last iteration.
    pub params: LinearParams,
    /// Closed-form least squares line through the same samples, for reference.
    pub ols: Option<LinearParams>,
}

/// The result of handing a sample set to a [`GradientEngine`].
///
/// Degenerate input is reported as its own variant so an empty trajectory is
/// never mistaken for a successful run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitOutcome {
    Trained(FitReport),
    Degenerate {
        reason: DegenerateReason,
        samples: SampleSet,
    },
}

impl FitOutcome {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, FitOutcome::Degenerate { .. })
    }

    pub fn samples(&self) -> &SampleSet {
        match self {
            FitOutcome::Trained(report) => &report.samples,
            FitOutcome::Degenerate { samples, .. } => samples,
        }
    }

    pub fn report(&self) -> Option<&FitReport> {
        match self {
            FitOutcome::Trained(report) => Some(report),
            FitOutcome::Degenerate { .. } => None,
        }
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.report().map(|report| &report.trajectory)
    }
}

/// Fits a line to a sample set by full-batch gradient descent on the squared loss.
pub struct GradientEngine<O: Optimizer> {
    optimizer: O,
    iterations: usize,
    initial: LinearParams,
}

impl GradientEngine<GradientDescent> {
    /// Creates a `GradientEngine` with the learning rates and iteration count of `config`.
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(
            GradientDescent::new(config.learning_rates()),
            config.iterations,
        )
    }
}

impl<O: Optimizer> GradientEngine<O> {
    /// Creates a new `GradientEngine` starting from `a = 1, b = 0`.
    ///
    /// # Arguments
    /// * `optimizer` - The update rule applied to `[a, b]` once per iteration.
    /// * `iterations` - The amount of iterations to run.
    pub fn new(optimizer: O, iterations: usize) -> Self {
        Self {
            optimizer,
            iterations,
            initial: LinearParams::default(),
        }
    }

    /// Overrides the parameters the descent starts from.
    pub fn with_initial(mut self, initial: LinearParams) -> Self {
        self.initial = initial;
        self
    }

    /// Runs every iteration over `samples`.
    ///
    /// Each iteration averages the loss and both gradient components over the
    /// samples in insertion order using the parameters from the start of the
    /// iteration, then updates both parameters at once. Non-finite values are
    /// recorded as they come.
    ///
    /// # Arguments
    /// * `samples` - The data to fit, moved into the outcome.
    ///
    /// # Returns
    /// A degenerate outcome if `samples` is empty or no iterations were
    /// requested, otherwise the full trajectory.
    ///
    /// # Errors
    /// Only if the optimizer rejects the two-parameter layout.
    pub fn train(&mut self, samples: SampleSet) -> Result<FitOutcome> {
        let reason = if samples.is_empty() {
            Some(DegenerateReason::EmptySampleSet)
        } else if self.iterations == 0 {
            Some(DegenerateReason::NoIterations)
        } else {
            None
        };

        if let Some(reason) = reason {
            warn!("nothing to fit: {reason}");
            return Ok(FitOutcome::Degenerate { reason, samples });
        }

        info!(samples = samples.len(), iterations = self.iterations; "fitting linear model");

        let n = samples.len() as f64;
        let mut params = self.initial.to_array();
        let mut trajectory = Trajectory::with_capacity(self.iterations);

        for iteration in 0..self.iterations {
            let [a, b] = params;
            let (mut error, mut da, mut db) = (0., 0., 0.);

            for (xi, yi) in samples.iter() {
                let y_hat = linear_model(xi, a, b);
                error += squared_loss(yi, y_hat) / n;
                da += grad_a(yi, y_hat, xi) / n;
                db += grad_b(yi, y_hat) / n;
            }

            let grad = [da, db];
            self.optimizer.update_params(&grad, &mut params)?;
            trajectory.push(LinearParams::from_array(params), grad, error);

            trace!(
                iteration = iteration,
                error = error,
                slope = params[0],
                intercept = params[1];
                "iteration done"
            );
        }

        if let Some(iteration) = trajectory.diverged_at() {
            warn!(iteration = iteration; "error stopped being finite, the learning rates are too large");
        }

        let params = LinearParams::from_array(params);
        info!(slope = params.slope, intercept = params.intercept; "fit finished");

        let ols = samples.ols();
        let report = FitReport {
            samples,
            trajectory,
            params,
            ols,
        };

        Ok(FitOutcome::Trained(report))
    }
}

/// Generates the samples described by `config` and fits a line to them.
///
/// # Errors
/// Returns `EngineErr::InvalidDispersion` if the noise cannot be sampled.
pub fn fit(config: &RunConfig) -> Result<FitOutcome> {
    config.validate()?;

    let mut rng = generate_rng(config.seed);
    let samples = SampleSet::generate(
        config.true_line(),
        config.dispersion,
        config.n_points,
        config.p_points,
        &mut rng,
    )?;

    GradientEngine::from_config(config).train(samples)
}

fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
