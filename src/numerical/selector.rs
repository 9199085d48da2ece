use super::integrands::{BuiltinIntegrand, Integrand};
use std::fmt;
use strum::IntoEnumIterator;

/// Number of integrands a registry holds; ids run from 1 to this value
pub const INTEGRAND_COUNT: usize = 4;

/// Error types for integrand selection
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    InvalidFunctionId(i32),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::InvalidFunctionId(_) => {
                write!(f, "Invalid function ID (must be 1, 2, 3, or 4)")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Maps function ids 1..=4 to integrands.
/// The default registry holds the built-in integrands; any four implementations can be injected instead.
pub struct IntegrandRegistry {
    integrands: [Box<dyn Integrand>; INTEGRAND_COUNT],
}

impl IntegrandRegistry {
    pub fn new(integrands: [Box<dyn Integrand>; INTEGRAND_COUNT]) -> Self {
        Self { integrands }
    }

    /// Registry of the four built-in integrands in id order
    pub fn builtin() -> Self {
        let integrands = [
            BuiltinIntegrand::Linear,
            BuiltinIntegrand::Quadratic,
            BuiltinIntegrand::Sine,
            BuiltinIntegrand::Cosine,
        ]
        .map(|f| Box::new(f) as Box<dyn Integrand>);
        debug_assert!(
            BuiltinIntegrand::iter()
                .zip(integrands.iter())
                .all(|(f, g)| f.name() == g.name())
        );
        Self { integrands }
    }

    pub fn select(&self, function_id: i32) -> Result<&dyn Integrand, SelectionError> {
        match function_id {
            1..=4 => Ok(self.integrands[(function_id - 1) as usize].as_ref()),
            _ => Err(SelectionError::InvalidFunctionId(function_id)),
        }
    }
}

impl Default for IntegrandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
