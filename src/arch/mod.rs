mod linear;
mod loss;

pub use linear::{LinearParams, linear_model};
pub use loss::{grad_a, grad_b, loss_gradient, squared_loss};
