//! Output-mode selection and the shared non-finite policy.
//!
//! Every evaluator funnels its raw model values through [`finish`], so the
//! NaN/Inf-to-zero substitution and the density/residual branching are
//! defined in exactly one place.

use sk_core::{Error, Result};

/// What an evaluator should return.
#[derive(Debug, Clone, Copy, Default)]
pub enum Output<'a> {
    /// The density itself.
    #[default]
    Density,
    /// `model - data`, the unweighted fitting residual.
    Residual {
        /// Observed data, same length as the input grid.
        data: &'a [f64],
    },
    /// `(model - data) / eps`, the residual normalized by per-point
    /// uncertainties.
    WeightedResidual {
        /// Observed data, same length as the input grid.
        data: &'a [f64],
        /// Per-point uncertainties, same length as `data`.
        eps: &'a [f64],
    },
}

/// Replace every non-finite entry with `0.0`.
///
/// Downstream optimizers cannot tolerate NaN, so numerically invalid points
/// (division by zero, non-converged integrals) silently become zero density.
/// Residuals at such points are therefore `-data` (or `-data/eps`), not a
/// flag of invalidity.
pub(crate) fn zero_non_finite(model: &mut [f64]) {
    for v in model.iter_mut() {
        if !v.is_finite() {
            *v = 0.0;
        }
    }
}

/// Apply the shared non-finite policy, then the requested output mode.
pub(crate) fn finish(mut model: Vec<f64>, output: Output<'_>) -> Result<Vec<f64>> {
    zero_non_finite(&mut model);
    match output {
        Output::Density => Ok(model),
        Output::Residual { data } => {
            if data.len() != model.len() {
                return Err(Error::Validation(format!(
                    "data length mismatch: expected {}, got {}",
                    model.len(),
                    data.len()
                )));
            }
            Ok(model.iter().zip(data).map(|(m, d)| m - d).collect())
        }
        Output::WeightedResidual { data, eps } => {
            if data.len() != model.len() || eps.len() != model.len() {
                return Err(Error::Validation(format!(
                    "data/eps length mismatch: expected {}, got {}/{}",
                    model.len(),
                    data.len(),
                    eps.len()
                )));
            }
            Ok(model
                .iter()
                .zip(data.iter().zip(eps))
                .map(|(m, (d, e))| (m - d) / e)
                .collect())
        }
    }
}
