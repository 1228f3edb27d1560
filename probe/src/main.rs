//! health-probe entry point

use clap::Parser;
use health_probe::cli::{self, Cli, EXIT_PROBE_FAILED};
use health_probe::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(EXIT_PROBE_FAILED);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to build Tokio runtime: {}", e);
            std::process::exit(EXIT_PROBE_FAILED);
        }
    };

    match runtime.block_on(cli::execute(&cli)) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_PROBE_FAILED);
        }
    }
}
