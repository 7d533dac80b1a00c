//! Rice density evaluator.

use sk_core::Result;

use crate::bessel;
use crate::output::{self, Output};
use crate::params::Params;

/// Rice density at a single point, noncentrality `a` and scale `s`.
///
/// This is the conventional shape/scale parameterization with shape `a/s`,
/// i.e. `p(x) = (x/s^2) exp(-(x^2 + a^2)/(2 s^2)) I0(a x / s^2)`, written in
/// the scaled form `(x/s^2) exp(-(x-a)^2/(2 s^2)) I0e(a x / s^2)` so large
/// `a x / s^2` stays finite.
pub fn pdf(x: f64, a: f64, s: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    let s2 = s * s;
    let z = x - a;
    (x / s2) * (-z * z / (2.0 * s2)).exp() * bessel::i0_scaled(a * x / s2)
}

/// Evaluate the Rice density (noncentrality `a`, scale `s`) on `x`.
pub fn evaluate(params: &Params, x: &[f64], out: Output<'_>) -> Result<Vec<f64>> {
    let a = params.get("a")?;
    let s = params.get("s")?;
    let model = x.iter().map(|&xi| pdf(xi, a, s)).collect();
    output::finish(model, out)
}
