use crate::error::NanoGradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Distribution used to draw initial parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` values.
    ///
    /// # Errors
    /// `InitializationError` for an empty or non-finite uniform range, or a negative
    /// or non-finite standard deviation.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>, NanoGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low < high) || !low.is_finite() || !high.is_finite() {
                    return Err(NanoGradError::InitializationError(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| {
                    NanoGradError::InitializationError(format!(
                        "normal(mean={}, std={}): {}",
                        mean, std, e
                    ))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Constant(value) => Ok(vec![value; n]),
        }
    }
}
