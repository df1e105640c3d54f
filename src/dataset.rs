use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::{EngineErr, LinearParams, Result};

/// An ordered set of `(x, y)` samples.
///
/// Once built, a `SampleSet` is never modified; the engine only iterates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Creates a new `SampleSet` from caller-supplied coordinates.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    /// * `y` - The targets, one per input.
    ///
    /// # Returns
    /// An error if `x` and `y` have different lengths.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(EngineErr::SizeMismatch {
                what: "sample targets",
                got: y.len(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y })
    }

    /// Generates noisy samples of the line `a * x + b`.
    ///
    /// `x` walks the integers of `[low, high)`; an inverted or empty range
    /// yields an empty set. Each target gets independent gaussian noise with
    /// mean 0 and standard deviation `dispersion`.
    ///
    /// # Arguments
    /// * `line` - The true slope and intercept.
    /// * `dispersion` - The noise standard deviation.
    /// * `low` - The inclusive lower bound of `x`.
    /// * `high` - The exclusive upper bound of `x`.
    /// * `rng` - A random number generator.
    ///
    /// # Returns
    /// An error if `dispersion` is negative or not finite.
    pub fn generate<R: Rng>(
        line: LinearParams,
        dispersion: f64,
        low: i64,
        high: i64,
        rng: &mut R,
    ) -> Result<Self> {
        if !dispersion.is_finite() || dispersion < 0. {
            return Err(EngineErr::InvalidDispersion { got: dispersion });
        }

        let noise = Normal::new(0., dispersion)
            .map_err(|_| EngineErr::InvalidDispersion { got: dispersion })?;

        let x: Vec<f64> = (low..high).map(|xi| xi as f64).collect();
        let y = x
            .iter()
            .map(|&xi| line.predict(xi) + noise.sample(rng))
            .collect();

        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates the samples as `(x, y)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Computes the closed-form least squares line through the samples.
    ///
    /// # Returns
    /// `None` if there are fewer than two samples or every `x` is the same.
    pub fn ols(&self) -> Option<LinearParams> {
        if self.len() < 2 {
            return None;
        }

        let n = self.len() as f64;
        let mean_x = self.x.iter().sum::<f64>() / n;
        let mean_y = self.y.iter().sum::<f64>() / n;

        let (ss_xy, ss_xx) = self
            .iter()
            .fold((0., 0.), |(ss_xy, ss_xx), (xi, yi)| {
                let dx = xi - mean_x;
                (ss_xy + dx * (yi - mean_y), ss_xx + dx * dx)
            });

        if ss_xx == 0. {
            return None;
        }

        let slope = ss_xy / ss_xx;
        Some(LinearParams::new(slope, mean_y - slope * mean_x))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn line() -> LinearParams {
        LinearParams::new(5., -20.)
    }

    #[test]
    fn generate_spans_the_half_open_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = SampleSet::generate(line(), 7., -20, 20, &mut rng).unwrap();

        assert_eq!(samples.len(), 40);
        assert_eq!(samples.x().first(), Some(&-20.));
        assert_eq!(samples.x().last(), Some(&19.));
        assert_eq!(samples.y().len(), 40);
    }

    #[test]
    fn generate_without_dispersion_is_exact() {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = SampleSet::generate(line(), 0., -3, 3, &mut rng).unwrap();

        for (xi, yi) in samples.iter() {
            assert_eq!(yi, 5. * xi - 20.);
        }
    }

    #[test]
    fn generate_inverted_range_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);

        let empty = SampleSet::generate(line(), 1., 0, 0, &mut rng).unwrap();
        assert!(empty.is_empty());

        let inverted = SampleSet::generate(line(), 1., 5, -5, &mut rng).unwrap();
        assert!(inverted.is_empty());
    }

    #[test]
    fn generate_rejects_bad_dispersion() {
        let mut rng = StdRng::seed_from_u64(0);

        for dispersion in [-1., f64::NAN, f64::INFINITY] {
            let err = SampleSet::generate(line(), dispersion, -1, 1, &mut rng).unwrap_err();
            assert!(matches!(err, EngineErr::InvalidDispersion { .. }));
        }
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = SampleSet::new(vec![1., 2.], vec![1.]).unwrap_err();
        assert!(matches!(
            err,
            EngineErr::SizeMismatch {
                got: 1,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn ols_recovers_a_noise_free_line() {
        let mut rng = StdRng::seed_from_u64(0);
        let samples = SampleSet::generate(line(), 0., -20, 20, &mut rng).unwrap();
        let fit = samples.ols().unwrap();

        assert!((fit.slope - 5.).abs() < 1e-9);
        assert!((fit.intercept + 20.).abs() < 1e-9);
    }

    #[test]
    fn ols_needs_spread_in_x() {
        let single = SampleSet::new(vec![1.], vec![2.]).unwrap();
        assert_eq!(single.ols(), None);

        let vertical = SampleSet::new(vec![3., 3., 3.], vec![1., 2., 3.]).unwrap();
        assert_eq!(vertical.ols(), None);
    }
}
