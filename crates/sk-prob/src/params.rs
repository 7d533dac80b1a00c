//! Parameter mappings shared by all evaluators.
//!
//! The external fitting framework hands parameters over either as plain
//! floats or as "boxed" values carrying fitting metadata (bounds, vary flag).
//! Unwrapping happens once, at the map boundary: evaluators only ever see
//! plain `f64`s.

use std::collections::HashMap;

use sk_core::{Error, Result};

/// A numeric parameter value: either a bare float or a float boxed by the
/// fitting framework.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// A bare number.
    Plain(f64),
    /// A number wrapped by the optimizer.
    Boxed(BoxedValue),
}

/// A parameter as tracked by the external optimizer: the current numeric
/// value plus the fitting metadata it carries alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxedValue {
    /// Current numeric value.
    pub value: f64,
    /// Lower fitting bound.
    pub min: f64,
    /// Upper fitting bound.
    pub max: f64,
    /// Whether the optimizer may vary this parameter.
    pub vary: bool,
}

impl BoxedValue {
    /// Boxed value with open bounds, free to vary.
    pub fn new(value: f64) -> Self {
        Self { value, min: f64::NEG_INFINITY, max: f64::INFINITY, vary: true }
    }
}

impl ParamValue {
    /// Unwrap to the plain numeric value.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            ParamValue::Plain(v) => *v,
            ParamValue::Boxed(b) => b.value,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Plain(v)
    }
}

impl From<BoxedValue> for ParamValue {
    fn from(b: BoxedValue) -> Self {
        ParamValue::Boxed(b)
    }
}

/// Named parameter set consumed by the evaluators.
///
/// Each evaluator reads a fixed subset of keys (`mu`, `s`, `a`). Domain
/// validity (`mu > 0`, `s > 0`) is the caller's responsibility: evaluators do
/// not validate values, they zero out non-finite densities instead.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Fetch a parameter, unwrapping boxed values to a plain float.
    ///
    /// A missing key surfaces as [`Error::Validation`]: the fitting framework
    /// is expected to always supply the complete parameter set for the chosen
    /// evaluator.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.values
            .get(name)
            .map(ParamValue::value)
            .ok_or_else(|| Error::Validation(format!("missing parameter '{name}'")))
    }
}
