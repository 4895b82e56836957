//! rpncalc - postfix notation calculator
//!
//! Usage:
//!   rpncalc              Start interactive REPL
//!   rpncalc -c "3 4 +"   Evaluate a single expression

mod cli;
mod config;
mod repl;
mod terminal;

use cli::{parse_args, print_help, print_version};
use config::Config;
use log::LevelFilter;
use repl::run_repl;
use std::env;
use std::process::ExitCode;
use terminal::execute_line;

/// Install the stderr logger; `--trace` raises this crate to trace level
fn init_logging(trace: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if trace {
        builder.filter_module("rpncalc", LevelFilter::Trace);
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'rpncalc --help' for usage");
            return ExitCode::from(2);
        }
    };

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("System error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.trace || config.trace);

    // Evaluate a single expression
    if let Some(expression) = cli.command {
        return match execute_line(&expression) {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    match run_repl(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("System error: {}", e);
            ExitCode::FAILURE
        }
    }
}
