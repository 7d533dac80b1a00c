//! Bessel kernels used by the speckle densities.
//!
//! `statrs` covers the gamma family but carries no Bessel functions, so the
//! three kernels needed here are provided directly:
//! - [`j0`]: first kind, order zero (rational approximations, ~1e-8 abs).
//! - [`i0_scaled`]: exponentially scaled modified first kind, order zero,
//!   `exp(-|x|) * I0(x)` (keeps the Rice density finite at large argument).
//! - [`kv`]: modified second kind of real order (Temme's series below `x = 2`,
//!   Steed's continued fraction above, upward recurrence in the order).

use statrs::function::gamma::gamma;

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Series/continued-fraction convergence threshold.
const EPS: f64 = 1e-16;
const MAX_ITER: usize = 10_000;

/// Bessel function of the first kind, order zero.
pub fn j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let p1 = 57_568_490_574.0
            + y * (-13_362_590_354.0
                + y * (651_619_640.7
                    + y * (-11_214_424.18 + y * (77_392.330_17 + y * (-184.905_245_6)))));
        let p2 = 57_568_490_411.0
            + y * (1_029_532_985.0
                + y * (9_494_680.718 + y * (59_272.648_53 + y * (267.853_271_2 + y))));
        p1 / p2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785_398_164;
        let p1 = 1.0
            + y * (-0.109_862_862_7e-2
                + y * (0.273_451_040_7e-4
                    + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
        let p2 = -0.156_249_999_5e-1
            + y * (0.143_048_876_5e-3
                + y * (-0.691_114_765_1e-5
                    + y * (0.762_109_516_1e-6 + y * (-0.934_935_152e-7))));
        (0.636_619_772 / ax).sqrt() * (xx.cos() * p1 - z * xx.sin() * p2)
    }
}

/// Exponentially scaled modified Bessel function of the first kind, order
/// zero: `exp(-|x|) * I0(x)`.
pub fn i0_scaled(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 3.75 {
        let t = x / 3.75;
        let y = t * t;
        let i0 = 1.0
            + y * (3.515_622_9
                + y * (3.089_942_4
                    + y * (1.206_749_2
                        + y * (0.265_973_2 + y * (0.036_076_8 + y * 0.004_581_3)))));
        (-ax).exp() * i0
    } else {
        let y = 3.75 / ax;
        (0.398_942_28
            + y * (0.013_285_92
                + y * (0.002_253_19
                    + y * (-0.001_575_65
                        + y * (0.009_162_81
                            + y * (-0.020_577_06
                                + y * (0.026_355_37
                                    + y * (-0.016_476_33 + y * 0.003_923_77))))))))
            / ax.sqrt()
    }
}

/// Modified Bessel function of the second kind of real order `nu`.
///
/// `K_{-nu} = K_nu`, so the order is folded to `nu >= 0`. Returns `inf` at
/// `x = 0` and NaN for `x < 0`; the evaluators' shared non-finite policy maps
/// both to zero density.
pub fn kv(nu: f64, x: f64) -> f64 {
    if x.is_nan() || nu.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    let nu = nu.abs();
    // Reduce to a base order xmu in [-1/2, 1/2] plus nl upward recurrences.
    let nl = (nu + 0.5) as usize;
    let xmu = nu - nl as f64;
    let xmu2 = xmu * xmu;
    let xi = 1.0 / x;
    let xi2 = 2.0 * xi;

    let (mut rkmu, mut rk1);
    if x < 2.0 {
        // Temme's series for K_mu and K_{mu+1}.
        let x2 = 0.5 * x;
        let pimu = std::f64::consts::PI * xmu;
        let fact = if pimu.abs() < EPS { 1.0 } else { pimu / pimu.sin() };
        let d = -x2.ln();
        let e = xmu * d;
        let fact2 = if e.abs() < EPS { 1.0 } else { e.sinh() / e };
        let (gam1, gam2, gampl, gammi) = temme_gammas(xmu);
        let mut ff = fact * (gam1 * e.cosh() + gam2 * fact2 * d);
        let mut sum = ff;
        let e = e.exp();
        let mut p = 0.5 * e / gampl;
        let mut q = 0.5 / (e * gammi);
        let mut c = 1.0;
        let d2 = x2 * x2;
        let mut sum1 = p;
        for i in 1..=MAX_ITER {
            let fi = i as f64;
            ff = (fi * ff + p + q) / (fi * fi - xmu2);
            c *= d2 / fi;
            p /= fi - xmu;
            q /= fi + xmu;
            let del = c * ff;
            sum += del;
            sum1 += c * (p - fi * ff);
            if del.abs() < sum.abs() * EPS {
                break;
            }
        }
        rkmu = sum;
        rk1 = sum1 * xi2;
    } else {
        // Steed's continued fraction (CF2).
        let mut b = 2.0 * (1.0 + x);
        let mut d = 1.0 / b;
        let mut delh = d;
        let mut h = delh;
        let mut q1 = 0.0;
        let mut q2 = 1.0;
        let a1 = 0.25 - xmu2;
        let mut q = a1;
        let mut c = a1;
        let mut a = -a1;
        let mut s = 1.0 + q * delh;
        for i in 2..=MAX_ITER {
            let fi = i as f64;
            a -= 2.0 * (fi - 1.0);
            c = -a * c / fi;
            let qnew = (q1 - b * q2) / a;
            q1 = q2;
            q2 = qnew;
            q += c * qnew;
            b += 2.0;
            d = 1.0 / (b + a * d);
            delh = (b * d - 1.0) * delh;
            h += delh;
            let dels = q * delh;
            s += dels;
            if (dels / s).abs() < EPS {
                break;
            }
        }
        let h = a1 * h;
        rkmu = (std::f64::consts::PI / (2.0 * x)).sqrt() * (-x).exp() / s;
        rk1 = rkmu * (xmu + x + 0.5 - h) * xi;
    }

    for i in 1..=nl {
        let rktemp = (xmu + i as f64) * xi2 * rk1 + rkmu;
        rkmu = rk1;
        rk1 = rktemp;
    }
    rkmu
}

/// The gamma combinations of Temme's series for `|xmu| <= 1/2`:
/// `gam1 = (1/G(1-m) - 1/G(1+m)) / (2m)`, `gam2 = (1/G(1-m) + 1/G(1+m)) / 2`,
/// plus the reciprocals themselves.
fn temme_gammas(xmu: f64) -> (f64, f64, f64, f64) {
    let gampl = 1.0 / gamma(1.0 + xmu);
    let gammi = 1.0 / gamma(1.0 - xmu);
    let gam1 = if xmu.abs() < 1e-6 {
        // limit as xmu -> 0
        -EULER_GAMMA
    } else {
        (gammi - gampl) / (2.0 * xmu)
    };
    let gam2 = (gammi + gampl) / 2.0;
    (gam1, gam2, gampl, gammi)
}
