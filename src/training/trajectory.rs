use serde::{Deserialize, Serialize};

use crate::LinearParams;

/// The per-iteration record of a gradient descent run.
///
/// Every sequence has exactly one entry per completed iteration, in iteration
/// order. Fields are private so the sequences can only grow together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    errors: Vec<f64>,
    slope: Vec<f64>,
    intercept: Vec<f64>,
    grad_a: Vec<f64>,
    grad_b: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty `Trajectory` with room for `iterations` entries.
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            errors: Vec::with_capacity(iterations),
            slope: Vec::with_capacity(iterations),
            intercept: Vec::with_capacity(iterations),
            grad_a: Vec::with_capacity(iterations),
            grad_b: Vec::with_capacity(iterations),
        }
    }

    /// Records one iteration.
    ///
    /// # Arguments
    /// * `params` - The parameters after this iteration's update.
    /// * `grad` - The `[da, db]` gradient used for the update.
    /// * `error` - The mean loss measured before the update.
    pub fn push(&mut self, params: LinearParams, [da, db]: [f64; 2], error: f64) {
        self.slope.push(params.slope);
        self.intercept.push(params.intercept);
        self.grad_a.push(da);
        self.grad_b.push(db);
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Mean loss per iteration.
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Slope estimate per iteration.
    pub fn slope(&self) -> &[f64] {
        &self.slope
    }

    /// Intercept estimate per iteration.
    pub fn intercept(&self) -> &[f64] {
        &self.intercept
    }

    /// Mean loss gradient with respect to the slope, per iteration.
    pub fn grad_a(&self) -> &[f64] {
        &self.grad_a
    }

    /// Mean loss gradient with respect to the intercept, per iteration.
    pub fn grad_b(&self) -> &[f64] {
        &self.grad_b
    }

    /// Returns the parameters reached by the last iteration, if any ran.
    pub fn final_params(&self) -> Option<LinearParams> {
        let slope = *self.slope.last()?;
        let intercept = *self.intercept.last()?;
        Some(LinearParams::new(slope, intercept))
    }

    /// Distance of every slope estimate from the true slope.
    pub fn slope_deviation(&self, true_slope: f64) -> Vec<f64> {
        self.slope.iter().map(|a| a - true_slope).collect()
    }

    /// Distance of every intercept estimate from the true intercept.
    pub fn intercept_deviation(&self, true_intercept: f64) -> Vec<f64> {
        self.intercept.iter().map(|b| b - true_intercept).collect()
    }

    /// Returns the index of the first iteration whose error is not finite.
    pub fn diverged_at(&self) -> Option<usize> {
        self.errors.iter().position(|e| !e.is_finite())
    }
}
