use super::Optimizer;
use crate::{EngineErr, Result};

/// Gradient descent with an independent learning rate per parameter.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    learning_rates: Box<[f64]>,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// Learning rates are not bounded: values that make the run diverge are
    /// accepted and yield infinite or NaN parameters.
    ///
    /// # Arguments
    /// * `learning_rates` - One step size per parameter, in parameter order.
    ///
    /// # Returns
    /// A new `GradientDescent` instance.
    pub fn new(learning_rates: impl Into<Box<[f64]>>) -> Self {
        Self {
            learning_rates: learning_rates.into(),
        }
    }

    pub fn learning_rates(&self) -> &[f64] {
        &self.learning_rates
    }
}

impl Optimizer for GradientDescent {
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()> {
        let expected = self.learning_rates.len();

        if grad.len() != expected {
            return Err(EngineErr::SizeMismatch {
                what: "gradient",
                got: grad.len(),
                expected,
            });
        }

        if params.len() != expected {
            return Err(EngineErr::SizeMismatch {
                what: "parameters",
                got: params.len(),
                expected,
            });
        }

        for ((p, g), lr) in params.iter_mut().zip(grad).zip(&self.learning_rates) {
            *p -= lr * g;
        }

        Ok(())
    }
}
