//! Gamma density evaluator.

use sk_core::Result;
use statrs::function::gamma::ln_gamma;

use crate::output::{self, Output};
use crate::params::Params;

/// Gamma density with shape `mu` and unit scale, at a single point.
///
/// `p(x) = x^(mu-1) exp(-x) / Gamma(mu)`, support `x >= 0`. An invalid shape
/// yields NaN, which the evaluator's non-finite policy maps to zero density.
pub fn pdf(x: f64, mu: f64) -> f64 {
    if !mu.is_finite() || mu <= 0.0 {
        return f64::NAN;
    }
    if x < 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        // shape 1 is the exponential case; below 1 the density diverges
        // (zeroed downstream), above 1 it vanishes.
        return if mu < 1.0 {
            f64::INFINITY
        } else if mu > 1.0 {
            0.0
        } else {
            1.0
        };
    }
    ((mu - 1.0) * x.ln() - x - ln_gamma(mu)).exp()
}

/// Evaluate the Gamma density (shape `mu`, unit scale) on `x`.
///
/// This also serves as the texture (mixing) density inside the homodyne-K
/// compound integrand, where it is called with the integration variable as
/// `x`.
pub fn evaluate(params: &Params, x: &[f64], out: Output<'_>) -> Result<Vec<f64>> {
    let mu = params.get("mu")?;
    let model = x.iter().map(|&xi| pdf(xi, mu)).collect();
    output::finish(model, out)
}
