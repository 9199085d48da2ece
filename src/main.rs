#![allow(non_snake_case)]
use RustedMidpoint::Utils::logger::init_logger;
use RustedMidpoint::Utils::settings::RunSettings;
use RustedMidpoint::cli::run;
use RustedMidpoint::numerical::selector::IntegrandRegistry;
use log::warn;
use std::io;

fn main() {
    let (settings, problems) = RunSettings::load(|key| std::env::var(key).ok());
    let logging = init_logger(&settings);
    for problem in &problems {
        if logging {
            warn!("{}", problem);
        } else {
            eprintln!("warning: {}", problem);
        }
    }

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let registry = IntegrandRegistry::builtin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = run(
        &args,
        &registry,
        &settings,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    log::logger().flush();
    std::process::exit(code);
}
