//! Prop contract checks for view components
//!
//! Components validate their required props at the boundary. A violation is
//! always logged. Debug builds panic on it so integration bugs surface at once;
//! release builds keep rendering with fallback values.

use thiserror::Error;
use tracing::error;

/// A required prop was not supplied in a usable form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("{component}: required prop `{prop}` is missing or blank")]
    MissingProp {
        component: &'static str,
        prop: &'static str,
    },
}

/// Check that every required text prop is non-blank.
///
/// Returns one violation per offending field, in the order given.
pub fn check_required(
    component: &'static str,
    fields: &[(&'static str, &str)],
) -> Vec<ContractViolation> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(prop, _)| ContractViolation::MissingProp { component, prop })
        .collect()
}

/// How a component reacts to a contract violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMode {
    /// Log and panic
    Strict,
    /// Log and let the component fall back to placeholder values
    Lenient,
}

impl Default for ContractMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ContractMode::Strict
        } else {
            ContractMode::Lenient
        }
    }
}

impl ContractMode {
    /// Report violations. Returns `true` when there were none.
    ///
    /// Panics in `Strict` mode if `violations` is non-empty.
    pub fn enforce(self, violations: &[ContractViolation]) -> bool {
        for violation in violations {
            error!("Contract violation: {violation}");
        }

        match violations.first() {
            None => true,
            Some(first) if self == ContractMode::Strict => panic!("{first}"),
            Some(_) => false,
        }
    }
}
