/// integrand trait, closure adapter and the four built-in integrands
pub mod integrands;
/// composite midpoint rule
/// Example
/// ```
/// use RustedMidpoint::numerical::integrands::ClosureIntegrand;
/// use RustedMidpoint::numerical::midpoint::integrate;
/// let f = ClosureIntegrand::new(|x, _intensity| x, "identity".to_string());
/// let result = integrate(&f, 0.0, 1.0, 4, 0).unwrap();
/// assert!((result - 0.5).abs() < 1e-6);
/// ```
pub mod midpoint;
/// function id -> integrand lookup
pub mod selector;
