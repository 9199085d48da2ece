use std::hint::black_box;
use strum_macros::{Display, EnumIter};

/// Trait for a one-dimensional integrand f(x, intensity).
/// `intensity` controls how much work one evaluation costs; it must never change the returned value.
pub trait Integrand {
    /// Evaluate the function at point x
    fn evaluate(&self, x: f32, intensity: i32) -> f32;

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_integrand"
    }
}

/// Simple integrand wrapper for closures
pub struct ClosureIntegrand<F>
where
    F: Fn(f32, i32) -> f32,
{
    func: F,
    name: String,
}

impl<F> ClosureIntegrand<F>
where
    F: Fn(f32, i32) -> f32,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> Integrand for ClosureIntegrand<F>
where
    F: Fn(f32, i32) -> f32,
{
    fn evaluate(&self, x: f32, intensity: i32) -> f32 {
        (self.func)(x, intensity)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Integrand + ?Sized> Integrand for &T {
    fn evaluate(&self, x: f32, intensity: i32) -> f32 {
        (**self).evaluate(x, intensity)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Integrand + ?Sized> Integrand for Box<T> {
    fn evaluate(&self, x: f32, intensity: i32) -> f32 {
        (**self).evaluate(x, intensity)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The four integrands shipped with the binary, in function-id order (Linear is id 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinIntegrand {
    /// f1(x) = x
    Linear,
    /// f2(x) = x^2
    Quadratic,
    /// f3(x) = sin(x)
    Sine,
    /// f4(x) = cos(x)
    Cosine,
}

impl BuiltinIntegrand {
    fn value(&self, x: f32) -> f32 {
        match self {
            BuiltinIntegrand::Linear => x,
            BuiltinIntegrand::Quadratic => x * x,
            BuiltinIntegrand::Sine => x.sin(),
            BuiltinIntegrand::Cosine => x.cos(),
        }
    }

    /// Exact antiderivative F(x) with F' = f, evaluated in f64
    pub fn antiderivative(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::Linear => 0.5 * x * x,
            BuiltinIntegrand::Quadratic => x * x * x / 3.0,
            BuiltinIntegrand::Sine => -x.cos(),
            BuiltinIntegrand::Cosine => x.sin(),
        }
    }

    /// Analytic value of the integral over [a, b]
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl Integrand for BuiltinIntegrand {
    fn evaluate(&self, x: f32, intensity: i32) -> f32 {
        burn(x, intensity);
        self.value(x)
    }

    fn name(&self) -> &str {
        match self {
            BuiltinIntegrand::Linear => "linear",
            BuiltinIntegrand::Quadratic => "quadratic",
            BuiltinIntegrand::Sine => "sine",
            BuiltinIntegrand::Cosine => "cosine",
        }
    }
}

/// Busy work proportional to `intensity`. Non-positive intensity does nothing.
/// black_box keeps the optimizer from dropping the loop.
fn burn(x: f32, intensity: i32) {
    let mut acc = black_box(x);
    for _ in 0..intensity {
        acc = black_box((acc.sin() * acc.cos()).abs().sqrt() + 1.0);
    }
    black_box(acc);
}
