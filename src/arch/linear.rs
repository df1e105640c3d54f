use serde::{Deserialize, Serialize};

/// Evaluates the line `a * x + b`.
pub fn linear_model(x: f64, a: f64, b: f64) -> f64 {
    a * x + b
}

/// The slope/intercept pair of a single-variable linear model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearParams {
    /// Creates a new `LinearParams`.
    ///
    /// # Arguments
    /// * `slope` - The `a` coefficient.
    /// * `intercept` - The `b` coefficient.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the model at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        linear_model(x, self.slope, self.intercept)
    }

    /// Returns the parameters as the flat `[a, b]` layout optimizers work on.
    pub fn to_array(self) -> [f64; 2] {
        [self.slope, self.intercept]
    }

    pub fn from_array([slope, intercept]: [f64; 2]) -> Self {
        Self { slope, intercept }
    }
}

/// Gradient descent starts every run from `a = 1, b = 0`.
impl Default for LinearParams {
    fn default() -> Self {
        Self::new(1., 0.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_model_evaluates_line() {
        assert_eq!(linear_model(2., 5., -20.), -10.);
        assert_eq!(linear_model(0., 5., -20.), -20.);
        assert_eq!(linear_model(-3., 1., 0.), -3.);
    }

    #[test]
    fn default_params_are_the_starting_point() {
        let params = LinearParams::default();
        assert_eq!(params.slope, 1.);
        assert_eq!(params.intercept, 0.);
        assert_eq!(params.predict(4.), 4.);
    }

    #[test]
    fn array_layout_is_slope_then_intercept() {
        let params = LinearParams::new(3., -7.);
        assert_eq!(params.to_array(), [3., -7.]);
        assert_eq!(LinearParams::from_array([3., -7.]), params);
    }
}
