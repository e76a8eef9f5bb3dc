use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use counter_tui::config::Config;
use counter_tui::counter::{select_counter, CounterAction};
use counter_tui::logging::{init_tracing, LogFallback};
use counter_tui::root::{build_store, AppReducer};
use counter_tui::store::Store;
use counter_tui::ui::app::App;
use counter_tui::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "counter-tui", version, about = "Terminal counter backed by a unidirectional state store")]
struct Cli {
    /// Config file (default: ~/.config/counter-tui/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Starting value, overrides counter.initial from the config
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    initial: Option<i64>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Apply comma-separated actions (increment, decrement, reset) without
    /// the TUI and print the final value
    #[arg(
        long,
        value_name = "ACTIONS",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    dispatch: Option<Vec<CounterAction>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    if let Some(initial) = cli.initial {
        config.counter.initial = initial;
    }

    let fallback = if cli.dispatch.is_some() {
        LogFallback::Stderr
    } else {
        LogFallback::Discard
    };
    init_tracing(&config.logging, fallback).context("Failed to initialize logging")?;

    let store = build_store(config.counter.initial);

    match cli.dispatch {
        Some(actions) => run_headless(store, actions),
        None => {
            let app = App::new(store)?;
            runtime::run(app, &config.ui).context("Terminal UI failed")
        }
    }
}

fn run_headless(mut store: Store<AppReducer>, actions: Vec<CounterAction>) -> anyhow::Result<()> {
    for action in actions {
        store.dispatch(action.into());
    }
    let value = store.select(&select_counter)?;
    println!("{}", value);
    Ok(())
}
