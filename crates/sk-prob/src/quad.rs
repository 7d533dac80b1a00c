//! Adaptive one-dimensional quadrature.
//!
//! Globally adaptive bisection with the 15-point Gauss-Kronrod rule
//! (QUADPACK's QK15 error estimate). The semi-infinite domain `[0, inf)` is
//! folded onto `(0, 1)` through `w = t / (1 - t)`; the rule never evaluates
//! interval endpoints, so neither `w = 0` nor `w = inf` is touched directly.
//!
//! Integration never panics and never returns an error: a non-converged or
//! non-finite integral comes back as a best-effort estimate with a large
//! error bound, and the evaluators' shared non-finite policy takes it from
//! there.

/// Abscissae of the 15-point Kronrod rule on `[-1, 1]` (positive half; the
/// odd indices 1, 3, 5 plus the midpoint form the embedded 7-point Gauss
/// rule).
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Weights of the embedded 7-point Gauss rule (nodes `XGK[1]`, `XGK[3]`,
/// `XGK[5]`, `XGK[7]`).
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_94,
    0.417_959_183_673_469_4,
];

/// Hard cap on the number of subdivided intervals.
const MAX_INTERVALS: usize = 128;

/// Integral estimate with its absolute error bound.
#[derive(Debug, Clone, Copy)]
pub struct QuadResult {
    /// Estimated value of the integral.
    pub value: f64,
    /// Estimated absolute error (infinite when the integrand produced
    /// non-finite values).
    pub error: f64,
}

/// Integrate `f` over `[0, inf)` to the requested tolerances.
pub fn integrate_0_inf(f: impl Fn(f64) -> f64, epsabs: f64, epsrel: f64) -> QuadResult {
    let g = |t: f64| {
        let u = 1.0 - t;
        f(t / u) / (u * u)
    };
    integrate(g, 0.0, 1.0, epsabs, epsrel)
}

/// Integrate `f` over the finite interval `[a, b]` to the requested
/// tolerances.
pub fn integrate(f: impl Fn(f64) -> f64, a: f64, b: f64, epsabs: f64, epsrel: f64) -> QuadResult {
    let (value, error) = gk15(&f, a, b);
    let mut intervals = vec![Interval { a, b, value, error }];

    loop {
        let total: f64 = intervals.iter().map(|iv| iv.value).sum();
        let total_err: f64 = intervals.iter().map(|iv| iv.error).sum();
        if !total.is_finite() {
            return QuadResult { value: total, error: f64::INFINITY };
        }
        if total_err <= epsabs.max(epsrel * total.abs()) || intervals.len() >= MAX_INTERVALS {
            return QuadResult { value: total, error: total_err };
        }

        // Bisect the interval with the largest error estimate (NaN counts as
        // largest so broken intervals get refined first).
        let mut worst = 0;
        for (i, iv) in intervals.iter().enumerate() {
            if iv.error.is_nan() || iv.error > intervals[worst].error {
                worst = i;
            }
        }
        let iv = intervals.swap_remove(worst);
        let mid = 0.5 * (iv.a + iv.b);
        if !(iv.a < mid && mid < iv.b) {
            // Interval too narrow to split further.
            intervals.push(iv);
            return QuadResult { value: total, error: total_err };
        }
        let (v1, e1) = gk15(&f, iv.a, mid);
        let (v2, e2) = gk15(&f, mid, iv.b);
        intervals.push(Interval { a: iv.a, b: mid, value: v1, error: e1 });
        intervals.push(Interval { a: mid, b: iv.b, value: v2, error: e2 });
    }
}

struct Interval {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// One application of the 15-point Kronrod rule on `[a, b]`, returning the
/// estimate and the QUADPACK-rescaled error bound.
fn gk15(f: &impl Fn(f64) -> f64, a: f64, b: f64) -> (f64, f64) {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);

    let fc = f(mid);
    let mut fv1 = [0.0f64; 7];
    let mut fv2 = [0.0f64; 7];
    let mut resk = WGK[7] * fc;
    let mut resabs = WGK[7] * fc.abs();
    let mut resg = WG[3] * fc;
    for j in 0..7 {
        let dx = half * XGK[j];
        let f1 = f(mid - dx);
        let f2 = f(mid + dx);
        fv1[j] = f1;
        fv2[j] = f2;
        resk += WGK[j] * (f1 + f2);
        resabs += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            resg += WG[j / 2] * (f1 + f2);
        }
    }

    let reskh = 0.5 * resk;
    let mut resasc = WGK[7] * (fc - reskh).abs();
    for j in 0..7 {
        resasc += WGK[j] * ((fv1[j] - reskh).abs() + (fv2[j] - reskh).abs());
    }

    let value = resk * half;
    let resabs = resabs * half.abs();
    let resasc = resasc * half.abs();
    let mut err = ((resk - resg) * half).abs();
    if resasc != 0.0 && err != 0.0 {
        err = resasc * 1.0f64.min((200.0 * err / resasc).powf(1.5));
    }
    let floor = 50.0 * f64::EPSILON * resabs;
    if resabs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        err = err.max(floor);
    }
    (value, err)
}
