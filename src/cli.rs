//! Command line front end: `<program> <functionid> <a> <b> <n> <intensity>`.
//!
//! On success a single line `<result> <elapsed_seconds>` goes to the output stream and the exit status is 0.
//! On failure one diagnostic line goes to the error stream, nothing is written to the output stream
//! and the exit status is [`FAILURE_EXIT_CODE`].
use crate::Utils::number_parser::{parse_float, parse_int};
use crate::Utils::output_format::format_result_line;
use crate::Utils::settings::RunSettings;
use crate::Utils::timer::{TimingReport, timed};
use crate::numerical::midpoint::{IntegrationError, integrate};
use crate::numerical::selector::{IntegrandRegistry, SelectionError};
use log::{debug, info};
use std::fmt;
use std::io::Write;
use std::time::Duration;

pub const SUCCESS_EXIT_CODE: i32 = 0;
pub const FAILURE_EXIT_CODE: i32 = -1;
/// positional arguments after the program name
pub const REQUIRED_ARGUMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    InsufficientArguments { program: String },
    InvalidFunctionId(i32),
    DegenerateSubdivision,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::InsufficientArguments { program } => write!(
                f,
                "usage: {} <functionid> <a> <b> <n> <intensity>",
                program
            ),
            CliError::InvalidFunctionId(id) => {
                write!(f, "Error: {}", SelectionError::InvalidFunctionId(*id))
            }
            CliError::DegenerateSubdivision => {
                write!(f, "Error: {}", IntegrationError::DegenerateSubdivision)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<SelectionError> for CliError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::InvalidFunctionId(id) => CliError::InvalidFunctionId(id),
        }
    }
}

impl From<IntegrationError> for CliError {
    fn from(e: IntegrationError) -> Self {
        match e {
            IntegrationError::DegenerateSubdivision => CliError::DegenerateSubdivision,
        }
    }
}

/// Parsed positional arguments. Parsing is permissive: malformed numbers read as their numeric prefix or zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    pub function_id: i32,
    pub a: f32,
    pub b: f32,
    pub n: i32,
    pub intensity: i32,
}

impl Arguments {
    /// `args[0]` is the program name; arguments past the fifth are ignored
    pub fn parse(args: &[String]) -> Result<Arguments, CliError> {
        if args.len() < REQUIRED_ARGUMENTS + 1 {
            let program = args.first().cloned().unwrap_or_else(|| "midpoint".to_string());
            return Err(CliError::InsufficientArguments { program });
        }
        Ok(Arguments {
            function_id: parse_int(&args[1]),
            a: parse_float(&args[2]) as f32,
            b: parse_float(&args[3]) as f32,
            n: parse_int(&args[4]),
            intensity: parse_int(&args[5]),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub integrand: String,
    pub result: f32,
    pub elapsed: Duration,
}

/// Select the integrand and time one integration over it
pub fn execute(registry: &IntegrandRegistry, arguments: &Arguments) -> Result<RunOutcome, CliError> {
    let integrand = registry.select(arguments.function_id)?;
    info!(
        "function {} ({}) over [{}, {}], n = {}, intensity = {}",
        arguments.function_id,
        integrand.name(),
        arguments.a,
        arguments.b,
        arguments.n,
        arguments.intensity
    );
    let (result, elapsed) = timed(|| {
        integrate(
            integrand,
            arguments.a,
            arguments.b,
            arguments.n,
            arguments.intensity,
        )
    });
    let result = result?;
    info!("result = {}, elapsed = {:?}", result, elapsed);
    Ok(RunOutcome {
        integrand: integrand.name().to_string(),
        result,
        elapsed,
    })
}

/// Full run: parse, integrate, print. Returns the process exit status.
pub fn run<W, E>(
    args: &[String],
    registry: &IntegrandRegistry,
    settings: &RunSettings,
    out: &mut W,
    err: &mut E,
) -> i32
where
    W: Write,
    E: Write,
{
    let outcome = Arguments::parse(args)
        .and_then(|arguments| execute(registry, &arguments).map(|outcome| (arguments, outcome)));
    match outcome {
        Ok((arguments, outcome)) => {
            let line = format_result_line(outcome.result, outcome.elapsed);
            if writeln!(out, "{}", line).and_then(|_| out.flush()).is_err() {
                return FAILURE_EXIT_CODE;
            }
            if settings.timing_table {
                TimingReport {
                    integrand: outcome.integrand,
                    a: arguments.a,
                    b: arguments.b,
                    n: arguments.n,
                    intensity: arguments.intensity,
                    elapsed: outcome.elapsed,
                }
                .log();
            }
            SUCCESS_EXIT_CODE
        }
        Err(e) => {
            // the terminal logger also writes to stderr: keep the diagnostic itself a single line
            debug!("run failed: {:?}", e);
            let _ = writeln!(err, "{}", e);
            let _ = err.flush();
            FAILURE_EXIT_CODE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::integrands::ClosureIntegrand;
    use approx::assert_relative_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_captured(list: &[&str]) -> (i32, String, String) {
        let registry = IntegrandRegistry::builtin();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&args(list), &registry, &RunSettings::default(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_parse_arguments() {
        let parsed = Arguments::parse(&args(&["prog", "2", "0.5", "-1.5", "100", "7"])).unwrap();
        assert_eq!(
            parsed,
            Arguments {
                function_id: 2,
                a: 0.5,
                b: -1.5,
                n: 100,
                intensity: 7
            }
        );
    }

    #[test]
    fn test_parse_arguments_is_permissive() {
        let parsed = Arguments::parse(&args(&["prog", "3x", "abc", "2.5km", "10.9", "", "extra"])).unwrap();
        assert_eq!(
            parsed,
            Arguments {
                function_id: 3,
                a: 0.0,
                b: 2.5,
                n: 10,
                intensity: 0
            }
        );
    }

    #[test]
    fn test_insufficient_arguments() {
        for count in 0..=REQUIRED_ARGUMENTS {
            let list: Vec<&str> = ["prog", "1", "0", "1", "4", "0"][..count].to_vec();
            let (code, out, err) = run_captured(&list);
            assert_ne!(code, 0);
            assert!(out.is_empty());
            assert!(err.starts_with("usage: "), "{}", err);
            assert!(err.contains("<functionid> <a> <b> <n> <intensity>"));
        }
    }

    #[test]
    fn test_usage_names_program() {
        let (_, _, err) = run_captured(&["./integrate", "1"]);
        assert_eq!(err, "usage: ./integrate <functionid> <a> <b> <n> <intensity>\n");
    }

    #[test]
    fn test_invalid_function_ids() {
        for id in ["0", "5", "-1", "abc"] {
            let (code, out, err) = run_captured(&["prog", id, "0", "1", "4", "0"]);
            assert_eq!(code, FAILURE_EXIT_CODE);
            assert!(out.is_empty());
            assert_eq!(err, "Error: Invalid function ID (must be 1, 2, 3, or 4)\n");
        }
    }

    #[test]
    fn test_zero_subintervals() {
        let (code, out, err) = run_captured(&["prog", "1", "0", "1", "0", "0"]);
        assert_eq!(code, FAILURE_EXIT_CODE);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Degenerate subdivision (n must not be zero)\n");
    }

    #[test]
    fn test_linear_scenario() {
        let (code, out, err) = run_captured(&["prog", "1", "0", "1", "4", "0"]);
        assert_eq!(code, SUCCESS_EXIT_CODE);
        assert!(err.is_empty());
        let fields: Vec<&str> = out.trim_end().split(' ').collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], "0.5");
        let (_, decimals) = fields[1].split_once('.').unwrap();
        assert_eq!(decimals.len(), 6);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_fractional_bounds_at_end_of_argument() {
        let (code, out, err) = run_captured(&["prog", "2", "0", "0.5", "4", "0"]);
        assert_eq!(code, SUCCESS_EXIT_CODE);
        assert!(err.is_empty());
        assert!(out.starts_with("0.041015625 "), "{}", out);
    }

    #[test]
    fn test_fractional_bounds_with_leading_space_and_extra_argument() {
        let (code, out, _) = run_captured(&["prog", " 1", "0.1", "0.7", "3", "-5", "extra"]);
        assert_eq!(code, SUCCESS_EXIT_CODE);
        let value: f64 = out.split(' ').next().unwrap().parse().unwrap();
        assert_relative_eq!(value, 0.24, epsilon = 1e-5);
    }

    #[test]
    fn test_failure_writes_one_diagnostic_line() {
        for list in [
            vec!["prog", "1"],
            vec!["prog", "9", "0", "1", "4", "0"],
            vec!["prog", "1", "0", "1", "0", "0"],
        ] {
            let (code, out, err) = run_captured(&list);
            assert_eq!(code, FAILURE_EXIT_CODE);
            assert!(out.is_empty());
            assert_eq!(err.lines().count(), 1, "{:?}", err);
        }
    }

    #[test]
    fn test_zero_width_scenario() {
        for id in ["1", "2", "3", "4"] {
            let (code, out, _) = run_captured(&["prog", id, "0", "0", "10", "0"]);
            assert_eq!(code, 0);
            assert!(out.starts_with("0 "), "{}", out);
        }
    }

    #[test]
    fn test_negative_subintervals_print_signed_zero() {
        let (code, out, _) = run_captured(&["prog", "1", "0", "1", "-3", "0"]);
        assert_eq!(code, 0);
        assert!(out.starts_with("-0 "), "{}", out);
    }

    #[test]
    fn test_reversed_bounds() {
        let (_, out, _) = run_captured(&["prog", "2", "3", "0", "300", "0"]);
        let value: f64 = out.split(' ').next().unwrap().parse().unwrap();
        assert_relative_eq!(value, -9.0, epsilon = 1e-3);
    }

    #[test]
    fn test_execute_with_injected_registry() {
        let registry = IntegrandRegistry::new([
            Box::new(ClosureIntegrand::new(|x, _| x, "stub".to_string())),
            Box::new(ClosureIntegrand::new(|_, _| 0.0, "zero".to_string())),
            Box::new(ClosureIntegrand::new(|_, _| 0.0, "zero".to_string())),
            Box::new(ClosureIntegrand::new(|_, _| 0.0, "zero".to_string())),
        ]);
        let arguments = Arguments {
            function_id: 1,
            a: 0.0,
            b: 1.0,
            n: 4,
            intensity: 0,
        };
        let outcome = execute(&registry, &arguments).unwrap();
        assert_eq!(outcome.integrand, "stub");
        assert_relative_eq!(outcome.result, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_errors_convert() {
        assert_eq!(
            CliError::from(SelectionError::InvalidFunctionId(7)),
            CliError::InvalidFunctionId(7)
        );
        assert_eq!(
            CliError::from(IntegrationError::DegenerateSubdivision),
            CliError::DegenerateSubdivision
        );
    }

    #[test]
    fn test_timing_table_does_not_touch_output() {
        let registry = IntegrandRegistry::builtin();
        let settings = RunSettings {
            timing_table: true,
            ..RunSettings::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            &args(&["prog", "3", "0", "3.14159", "50", "2"]),
            &registry,
            &settings,
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
