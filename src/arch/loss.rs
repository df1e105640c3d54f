/// Half squared error between a target and a prediction.
pub fn squared_loss(y_true: f64, y_hat: f64) -> f64 {
    0.5 * (y_true - y_hat) * (y_true - y_hat)
}

/// Derivative of [`squared_loss`] with respect to the prediction, scaled by `x`.
///
/// Passing the sample's `x` gives the slope component of the gradient, passing
/// `1.0` gives the intercept component. [`grad_a`] and [`grad_b`] name both uses.
pub fn loss_gradient(y_true: f64, y_hat: f64, x: f64) -> f64 {
    -(y_true - y_hat) * x
}

/// Partial derivative of the loss with respect to the slope.
pub fn grad_a(y_true: f64, y_hat: f64, x: f64) -> f64 {
    loss_gradient(y_true, y_hat, x)
}

/// Partial derivative of the loss with respect to the intercept.
pub fn grad_b(y_true: f64, y_hat: f64) -> f64 {
    loss_gradient(y_true, y_hat, 1.)
}
