//! Indicator registry.
//!
//! The registry maps an indicator name to an [`IndicatorDef`]: the unit's
//! shape contract, declared parameters, summary, and a type-erased runner
//! that constructs and computes the unit. It supports:
//!
//! - discovery from a static declaration list ([`indicators::BUILTIN`])
//! - a process-wide instance built once, on first use
//! - lookup by name and sorted enumeration
//! - custom registries for hosts and tests
//!
//! Discovery never aborts. A malformed definition or a duplicate name is
//! skipped, logged at `warn` level, and recorded as a [`DiscoveryWarning`].
//! For duplicate names the first registration wins.
//!
//! # Example
//!
//! ```
//! use unified_ta::registry::Registry;
//! use unified_ta::shape::ShapeContract;
//!
//! let registry = Registry::global();
//! assert!(registry.contains("KAMA"));
//! assert_eq!(registry.get("VPN").unwrap().shape, ShapeContract::RequiresOhlcv);
//!
//! let names = registry.names();
//! assert!(names.windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! [`indicators::BUILTIN`]: crate::indicators::BUILTIN

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::Result;
use crate::frame::Frame;
use crate::indicator::{Indicator, IndicatorOutput};
use crate::indicators::BUILTIN;
use crate::params::{ParamSpec, Params};
use crate::shape::ShapeContract;

/// Type-erased construct-and-compute entry point of a unit.
pub type Runner = fn(&Frame, &str, &Params) -> Result<IndicatorOutput>;

/// An entry of a declaration list: produces one definition.
pub type Declaration = fn() -> IndicatorDef;

fn run_unit<U: Indicator>(data: &Frame, column: &str, params: &Params) -> Result<IndicatorOutput> {
    U::new(data, column, params)?.compute()
}

/// A registered indicator.
#[derive(Clone, Copy)]
pub struct IndicatorDef {
    /// Registry key.
    pub name: &'static str,
    /// Input contract.
    pub shape: ShapeContract,
    /// Declared parameters with defaults.
    pub params: &'static [ParamSpec],
    /// One-line description.
    pub summary: &'static str,
    run: Runner,
}

impl IndicatorDef {
    /// Builds the definition of an [`Indicator`] unit from its associated constants.
    #[must_use]
    pub fn of<U: Indicator>() -> Self {
        Self {
            name: U::NAME,
            shape: U::SHAPE,
            params: U::PARAMS,
            summary: U::SUMMARY,
            run: run_unit::<U>,
        }
    }

    /// Builds a definition from its parts.
    #[must_use]
    pub const fn new(
        name: &'static str,
        shape: ShapeContract,
        params: &'static [ParamSpec],
        summary: &'static str,
        run: Runner,
    ) -> Self {
        Self {
            name,
            shape,
            params,
            summary,
            run,
        }
    }

    /// Constructs the unit over `data` and computes it.
    ///
    /// # Errors
    ///
    /// Returns the unit's shape, parameter, or computation error.
    pub fn run(&self, data: &Frame, column: &str, params: &Params) -> Result<IndicatorOutput> {
        (self.run)(data, column, params)
    }

    /// Returns the descriptive part of this definition.
    #[must_use]
    pub const fn info(&self) -> IndicatorInfo {
        IndicatorInfo {
            name: self.name,
            shape: self.shape,
            params: self.params,
            summary: self.summary,
        }
    }

    /// Checks the definition, returning the reason it is malformed.
    fn check(&self) -> std::result::Result<(), String> {
        if self.name.is_empty() {
            return Err("empty name".to_owned());
        }
        if let Some(c) = self
            .name
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(format!("invalid character {c:?} in name"));
        }
        for (i, spec) in self.params.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(format!("parameter {i} has an empty name"));
            }
            if self.params[..i].iter().any(|other| other.name == spec.name) {
                return Err(format!("parameter '{}' declared twice", spec.name));
            }
            spec.check(spec.default)
                .map_err(|reason| format!("default of parameter '{}': {reason}", spec.name))?;
        }
        Ok(())
    }
}

impl fmt::Debug for IndicatorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorDef")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("params", &self.params)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

/// Description of a registered indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorInfo {
    /// Registry key.
    pub name: &'static str,
    /// Input contract.
    pub shape: ShapeContract,
    /// Declared parameters with defaults.
    pub params: &'static [ParamSpec],
    /// One-line description.
    pub summary: &'static str,
}

impl fmt::Display for IndicatorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.shape)?;
        for (i, spec) in self.params.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}={}", spec.name, spec.default)?;
        }
        write!(f, ": {}", self.summary)
    }
}

/// A non-fatal problem found while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryWarning {
    /// A definition failed its checks and was skipped.
    #[error("skipping malformed indicator '{unit}': {reason}")]
    Malformed {
        /// Name as declared.
        unit: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A second definition used an existing name and was skipped.
    #[error("duplicate indicator name '{name}': keeping the first registration")]
    DuplicateName {
        /// The contested name.
        name: String,
    },
}

/// Name-to-definition mapping of indicator units.
///
/// Entries are never removed. Iteration and [`Registry::names`] are sorted
/// by name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, IndicatorDef>,
    warnings: Vec<DiscoveryWarning>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a declaration list.
    ///
    /// Malformed and duplicate definitions are skipped and recorded in
    /// [`Registry::warnings`].
    #[must_use]
    pub fn discover(declarations: &[Declaration]) -> Self {
        let mut registry = Self::new();
        for declare in declarations {
            // Rejections are already logged and recorded.
            let _ = registry.register(declare());
        }
        registry
    }

    /// Returns the process-wide registry of built-in units.
    ///
    /// Built from [`BUILTIN`] on the first call from any thread; every later
    /// call returns the same instance.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            let registry = Self::discover(BUILTIN);
            debug!(
                indicators = registry.len(),
                warnings = registry.warnings.len(),
                "built indicator registry"
            );
            registry
        })
    }

    /// Adds a definition.
    ///
    /// # Errors
    ///
    /// Returns the [`DiscoveryWarning`] explaining why the definition was
    /// skipped. The warning is also logged and kept in
    /// [`Registry::warnings`].
    pub fn register(&mut self, def: IndicatorDef) -> std::result::Result<(), DiscoveryWarning> {
        let rejection = match def.check() {
            Err(reason) => Some(DiscoveryWarning::Malformed {
                unit: def.name.to_owned(),
                reason,
            }),
            Ok(()) if self.entries.contains_key(def.name) => Some(DiscoveryWarning::DuplicateName {
                name: def.name.to_owned(),
            }),
            Ok(()) => None,
        };

        match rejection {
            Some(warning) => {
                warn!(%warning, "indicator discovery");
                self.warnings.push(warning.clone());
                Err(warning)
            }
            None => {
                self.entries.insert(def.name, def);
                Ok(())
            }
        }
    }

    /// Returns the definition registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndicatorDef> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &IndicatorDef> {
        self.entries.values()
    }

    /// Returns the warnings collected while building this registry.
    #[must_use]
    pub fn warnings(&self) -> &[DiscoveryWarning] {
        &self.warnings
    }

    /// Returns the description of a registered unit.
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<IndicatorInfo> {
        self.get(name).map(IndicatorDef::info)
    }
}
