use clap::Parser;
use tracing::error;

use vaxsched::adapter::inbound::cli::command::Cli;
use vaxsched::adapter::inbound::cli::{output, run};

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    if let Err(e) = run::execute(&cli, stdin.lock()) {
        error!(error = %e, "Fatal error");
        output::fatal(&e.to_string());
        std::process::exit(1);
    }
}
