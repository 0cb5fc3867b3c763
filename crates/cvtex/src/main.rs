mod cli;
mod commands;
mod context;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = commands::build::run(cli.no_pdf) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
