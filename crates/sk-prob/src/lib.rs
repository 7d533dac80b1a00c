//! # sk-prob
//!
//! Speckle amplitude statistics for coherent imaging (radar / ultrasound).
//!
//! Five pure density evaluators used to fit amplitude histograms: Gamma,
//! Rayleigh, Rice, K, and homodyne-K. Each evaluates either the density on a
//! grid or a (weighted) residual against observed data, for consumption by an
//! external curve-fitting loop. Support modules provide:
//! - the parameter map with boxed-value unwrapping ([`params`])
//! - the shared output-mode selection and non-finite policy ([`output`])
//! - Bessel kernels `J0`, scaled `I0`, real-order `K_nu` ([`bessel`])
//! - adaptive Gauss-Kronrod quadrature over `[0, inf)` ([`quad`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bessel;
pub mod gamma;
pub mod homodyne_k;
pub mod k_dist;
pub mod output;
pub mod params;
pub mod quad;
pub mod rayleigh;
pub mod rice;

pub use homodyne_k::{Method, Options};
pub use output::Output;
pub use params::{BoxedValue, ParamValue, Params};
