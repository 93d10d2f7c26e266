use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::cli::handlers;
use ticklist::logging::{LogSink, init_logging};

fn main() {
    let cli = Cli::parse();

    let sink = LogSink::choose(cli.log_file.as_deref(), cli.command.is_some());
    if let Err(e) = init_logging(sink) {
        eprintln!("error: could not open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
