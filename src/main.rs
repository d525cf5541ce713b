mod cli;
mod clock;
mod config;
mod convert;
mod entries_cmd;
mod logging;
mod month_cmd;
mod output;
mod predict_cmd;
mod window_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let store_path = convert::resolve_store_path(&config.store, cli.store.as_deref());

    match cli.command {
        Command::Month(args) => month_cmd::run(args, &config, &store_path),
        Command::Predict(args) => predict_cmd::run(args, &config, &store_path),
        Command::Window(args) => window_cmd::run(args, &config),
        Command::Add(args) => entries_cmd::run_add(args, &store_path),
        Command::List(args) => entries_cmd::run_list(args, &config, &store_path),
        Command::Delete(args) => entries_cmd::run_delete(args, &store_path),
    }
}
