use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod display;
mod util;

const LOG_ENV: &str = "MMTRANS_LOG";

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "mmic_translator=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.global.verbose);

    let ctx = display::Context::detect().with_quiet(cli.global.quiet);

    match commands::dispatch(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
