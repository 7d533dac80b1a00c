//! Rayleigh density evaluator.

use sk_core::Result;

use crate::output::{self, Output};
use crate::params::Params;

/// Rayleigh density with scale `s` at a single point.
///
/// Support `x >= 0`. A degenerate scale produces NaN/Inf, which the
/// evaluator's non-finite policy maps to zero density.
pub fn pdf(x: f64, s: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    let s2 = s * s;
    (x / s2) * (-x * x / (2.0 * s2)).exp()
}

/// Evaluate the Rayleigh density (scale `s`) on `x`.
pub fn evaluate(params: &Params, x: &[f64], out: Output<'_>) -> Result<Vec<f64>> {
    let s = params.get("s")?;
    let model = x.iter().map(|&xi| pdf(xi, s)).collect();
    output::finish(model, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_scale_at_one() {
        let params = Params::new().with("s", 1.0);
        let out = evaluate(&params, &[1.0], Output::Density).unwrap();
        assert_relative_eq!(out[0], (-0.5f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_at_origin() {
        let params = Params::new().with("s", 2.0);
        let out = evaluate(&params, &[0.0], Output::Density).unwrap();
        assert_eq!(out[0], 0.0);
    }

    #[test]
    fn test_degenerate_scale_zeroes() {
        let params = Params::new().with("s", 0.0);
        let out = evaluate(&params, &[0.0, 1.0], Output::Density).unwrap();
        assert_eq!(out, vec![0.0, 0.0]);
    }
}
