/*
Wall-clock timing of a single integration run and a pretty table summarising it.
Timing is taken from std::time::Instant, which is monotonic.
*/
use log::info;
use std::time::{Duration, Instant};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Run `f` once and return its output together with the elapsed wall-clock time
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    (output, elapsed)
}

/// Summary of one integration run
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    pub integrand: String,
    pub a: f32,
    pub b: f32,
    pub n: i32,
    pub intensity: i32,
    pub elapsed: Duration,
}

impl TimingReport {
    /// Integrand evaluations per second, None when nothing was evaluated or no time was measured
    pub fn throughput(&self) -> Option<f64> {
        let seconds = self.elapsed.as_secs_f64();
        if self.n <= 0 || seconds <= 0.0 {
            return None;
        }
        Some(self.n as f64 / seconds)
    }

    pub fn rows(&self) -> Vec<(String, String)> {
        let throughput = match self.throughput() {
            Some(t) => format!("{:.3e}", t),
            None => "-".to_string(),
        };
        vec![
            ("integrand".to_string(), self.integrand.clone()),
            ("interval".to_string(), format!("[{}, {}]", self.a, self.b)),
            ("subintervals".to_string(), self.n.to_string()),
            ("intensity".to_string(), self.intensity.to_string()),
            (
                "time elapsed, s".to_string(),
                format!("{:.6}", self.elapsed.as_secs_f64()),
            ),
            ("evaluations per second".to_string(), throughput),
        ]
    }

    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();
        for (key, value) in self.rows() {
            builder.push_record([key, value]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }

    pub fn log(&self) {
        info!("\n \n TIMER DATA \n \n {}", self.to_table());
    }
}
