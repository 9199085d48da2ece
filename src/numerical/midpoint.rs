//! Composite midpoint rule in single precision.
//!
//! The integral of f over [a, b] is approximated by
//! `dx * sum_{i=0}^{n-1} f(a + (i + 0.5) * dx)` with `dx = (b - a) / n`.
//! The sum is accumulated left to right so that identical inputs give bit-identical results.
use super::integrands::Integrand;
use log::{debug, warn};
use std::fmt;

/// Error types for the midpoint integrator
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrationError {
    /// n == 0: the step size (b - a) / n is undefined
    DegenerateSubdivision,
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationError::DegenerateSubdivision => {
                write!(f, "Degenerate subdivision (n must not be zero)")
            }
        }
    }
}

impl std::error::Error for IntegrationError {}

/// Approximate the integral of `f` over [a, b] with `n` midpoint samples.
///
/// * `b < a` gives a negative step and a signed result, the bounds are never swapped.
/// * `n < 0` runs no iterations and returns `0 * dx`.
/// * `n == 0` is rejected with [`IntegrationError::DegenerateSubdivision`].
pub fn integrate<F>(f: &F, a: f32, b: f32, n: i32, intensity: i32) -> Result<f32, IntegrationError>
where
    F: Integrand + ?Sized,
{
    if n == 0 {
        return Err(IntegrationError::DegenerateSubdivision);
    }
    let dx = (b - a) / n as f32;
    debug!(
        "integrating {} over [{}, {}] with n = {}, dx = {}, intensity = {}",
        f.name(),
        a,
        b,
        n,
        dx,
        intensity
    );
    let mut sum = 0.0f32;
    for i in 0..n {
        let x = a + (i as f32 + 0.5) * dx;
        sum += f.evaluate(x, intensity);
    }
    let result = sum * dx;
    if !result.is_finite() {
        warn!("integral of {} is not finite: {}", f.name(), result);
    }
    Ok(result)
}
