use super::settings::RunSettings;
use chrono::Local;
use simplelog::*;
use std::fs::File;

/// File name written when the log file is set to "auto"
pub fn auto_log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Resolve the configured log file; "auto" becomes a time-stamped name
pub fn resolve_log_file(log_file: &Option<String>) -> Option<String> {
    match log_file.as_deref() {
        Some("auto") => Some(auto_log_file_name()),
        Some(name) => Some(name.to_string()),
        None => None,
    }
}

/// Initialize the logger based on the run settings.
/// The terminal logger writes to stderr only: stdout carries nothing but the result line.
/// Returns false when logging stays off or a global logger was already set.
pub fn init_logger(settings: &RunSettings) -> bool {
    let level = settings.log_level;
    if level == LevelFilter::Off {
        return false;
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    // File logger
    if let Some(filename) = resolve_log_file(&settings.log_file) {
        match File::create(&filename) {
            Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
            Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
        }
    }

    CombinedLogger::init(loggers).is_ok()
}
