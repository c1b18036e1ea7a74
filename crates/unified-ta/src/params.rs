//! Named indicator parameters.
//!
//! Every indicator unit declares its parameters as a static list of
//! [`ParamSpec`]s (name, kind, default). Callers pass a [`Params`] map, which
//! is resolved against that list before any computation: unknown names are
//! rejected, values are checked against their kind, and missing names take
//! their defaults.
//!
//! `Params` is serde-transparent, so parameter sets can be loaded from JSON or
//! any other serde format:
//!
//! ```
//! use unified_ta::params::{ParamValue, Params};
//!
//! let params: Params = serde_json::from_str(r#"{"period": 20, "adjust": false}"#).unwrap();
//! assert_eq!(params.get("period"), Some(ParamValue::Int(20)));
//! assert_eq!(params.get("adjust"), Some(ParamValue::Bool(false)));
//!
//! let same = Params::new().with("period", 20).with("adjust", false);
//! assert_eq!(params, same);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer, typically a window length.
    Int(i64),
    /// A floating-point value, typically a multiplier.
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// What a declared parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A window length: an integer of at least 1.
    Period,
    /// A strictly positive, finite number.
    Positive,
    /// A boolean flag.
    Flag,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period => f.write_str("period"),
            Self::Positive => f.write_str("positive number"),
            Self::Flag => f.write_str("flag"),
        }
    }
}

/// Declaration of one indicator parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter name as passed by callers.
    pub name: &'static str,
    /// Accepted kind.
    pub kind: ParamKind,
    /// Value used when the caller does not supply one.
    pub default: ParamValue,
}

impl ParamSpec {
    /// Declares a window-length parameter.
    #[must_use]
    pub const fn period(name: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: ParamKind::Period,
            default: ParamValue::Int(default),
        }
    }

    /// Declares a strictly positive numeric parameter.
    #[must_use]
    pub const fn positive(name: &'static str, default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Positive,
            default: ParamValue::Float(default),
        }
    }

    /// Declares a boolean parameter.
    #[must_use]
    pub const fn flag(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: ParamKind::Flag,
            default: ParamValue::Bool(default),
        }
    }

    /// Normalizes `value` to this parameter's kind.
    ///
    /// Integral floats are accepted as periods and integers as positive
    /// numbers.
    ///
    /// # Errors
    ///
    /// Returns the reason the value is unacceptable.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn check(&self, value: ParamValue) -> std::result::Result<ParamValue, &'static str> {
        match (self.kind, value) {
            (ParamKind::Period, ParamValue::Int(n)) if n >= 1 => Ok(ParamValue::Int(n)),
            (ParamKind::Period, ParamValue::Float(x)) if x >= 1.0 && x.fract() == 0.0 && x.is_finite() => {
                Ok(ParamValue::Int(x as i64))
            }
            (ParamKind::Period, ParamValue::Bool(_)) => Err("expected an integer period"),
            (ParamKind::Period, _) => Err("period must be a positive integer"),
            (ParamKind::Positive, ParamValue::Int(n)) if n > 0 => Ok(ParamValue::Float(n as f64)),
            (ParamKind::Positive, ParamValue::Float(x)) if x > 0.0 && x.is_finite() => {
                Ok(ParamValue::Float(x))
            }
            (ParamKind::Positive, ParamValue::Bool(_)) => Err("expected a number"),
            (ParamKind::Positive, _) => Err("value must be positive and finite"),
            (ParamKind::Flag, ParamValue::Bool(b)) => Ok(ParamValue::Bool(b)),
            (ParamKind::Flag, _) => Err("expected a boolean"),
        }
    }
}

/// Caller-supplied parameter values, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter set (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `name` bound to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.0.get(name).copied()
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameter is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over bound parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Resolves these values against an indicator's declared parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownParameter` for a name `specs` does not declare
    /// and `Error::InvalidParameter` for a value of the wrong kind.
    pub fn resolve(&self, indicator: &'static str, specs: &[ParamSpec]) -> Result<Resolved> {
        if let Some(name) = self.0.keys().find(|k| !specs.iter().any(|s| s.name == k.as_str())) {
            return Err(Error::UnknownParameter {
                indicator,
                name: name.clone(),
            });
        }

        let mut values = BTreeMap::new();
        for spec in specs {
            let raw = self.get(spec.name).unwrap_or(spec.default);
            let value = spec.check(raw).map_err(|reason| Error::InvalidParameter {
                indicator,
                name: spec.name.to_owned(),
                reason,
            })?;
            values.insert(spec.name, value);
        }

        Ok(Resolved { indicator, values })
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A parameter set checked against an indicator's declarations.
///
/// Every declared name is present with a value of its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    indicator: &'static str,
    values: BTreeMap<&'static str, ParamValue>,
}

impl Resolved {
    fn lookup(&self, name: &str) -> Result<ParamValue> {
        self.values.get(name).copied().ok_or_else(|| Error::UnknownParameter {
            indicator: self.indicator,
            name: name.to_owned(),
        })
    }

    fn mismatch(&self, name: &str, reason: &'static str) -> Error {
        Error::InvalidParameter {
            indicator: self.indicator,
            name: name.to_owned(),
            reason,
        }
    }

    /// Returns a declared period parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is undeclared or not a period.
    pub fn period(&self, name: &str) -> Result<usize> {
        match self.lookup(name)? {
            ParamValue::Int(n) => usize::try_from(n).map_err(|_| self.mismatch(name, "period out of range")),
            _ => Err(self.mismatch(name, "expected an integer period")),
        }
    }

    /// Returns a declared positive numeric parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is undeclared or not numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn positive(&self, name: &str) -> Result<f64> {
        match self.lookup(name)? {
            ParamValue::Float(x) => Ok(x),
            ParamValue::Int(n) => Ok(n as f64),
            ParamValue::Bool(_) => Err(self.mismatch(name, "expected a number")),
        }
    }

    /// Returns a declared boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is undeclared or not a flag.
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.lookup(name)? {
            ParamValue::Bool(b) => Ok(b),
            _ => Err(self.mismatch(name, "expected a boolean")),
        }
    }

    /// Iterates over the resolved values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ParamValue)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}
