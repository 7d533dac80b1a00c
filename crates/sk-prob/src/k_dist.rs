//! K-distribution density evaluator.

use sk_core::Result;
use statrs::function::gamma::gamma;

use crate::bessel;
use crate::output::{self, Output};
use crate::params::Params;

/// K-distribution density at a single point, scale `s` and shape `mu`.
///
/// With `b = sqrt(2 mu) / s`:
/// `p(x) = 2 (x/2)^mu b^(mu+1) / Gamma(mu) * K_{mu-1}(b x)`.
///
/// The raw formula is indeterminate at `x = 0` (`0 * inf`); the evaluator's
/// non-finite policy maps that point to zero.
pub fn pdf(x: f64, s: f64, mu: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    let b = (2.0 * mu).sqrt() / s;
    2.0 * (x / 2.0).powf(mu) * b.powf(mu + 1.0) / gamma(mu) * bessel::kv(mu - 1.0, b * x)
}

/// Evaluate the K-distribution density (scale `s`, shape `mu`) on `x`.
pub fn evaluate(params: &Params, x: &[f64], out: Output<'_>) -> Result<Vec<f64>> {
    let s = params.get("s")?;
    let mu = params.get("mu")?;
    let model = x.iter().map(|&xi| pdf(xi, s, mu)).collect();
    output::finish(model, out)
}
