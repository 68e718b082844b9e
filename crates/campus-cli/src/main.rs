//! Campus back office CLI.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use campus_cli::cli::{Cli, Command, ConfigCommand, LogFormatArg, LogLevelArg};
use campus_cli::commands::{self, Console};
use campus_cli::logging::{LogConfig, LogFormat, init_logging};
use campus_cli::render;
use campus_cli::settings::Settings;
use campus_client::ResourceClient;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<bool> {
    let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);

    if let Command::Config(command) = &cli.command {
        return run_config(command, &config_path, cli.base_url.clone());
    }

    let settings = Settings::load_from(&config_path).with_base_url(cli.base_url);
    tracing::debug!(base_url = %settings.api.base_url, "using API");
    let client = ResourceClient::connect(&settings.api)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut confirm = prompt_confirm;
    let mut console = Console {
        out: &mut stdout,
        err: &mut stderr,
        confirm: &mut confirm,
    };
    runtime.block_on(commands::run(cli.command, client, &mut console))
}

fn run_config(command: &ConfigCommand, path: &Path, base_url: Option<String>) -> Result<bool> {
    match command {
        ConfigCommand::Show => {
            let settings = Settings::load_from(path).with_base_url(base_url);
            println!("# {}", path.display());
            println!("{}", render::settings_text(&settings.api));
        }
        ConfigCommand::SetBaseUrl { url } => {
            let settings = Settings::load_from(path).with_base_url(Some(url.clone()));
            settings.save_to(path)?;
            println!("Saved base URL to {}", path.display());
        }
    }
    Ok(true)
}

/// Ask on stderr, read the answer from stdin. Anything but yes declines.
fn prompt_confirm(prompt: &str) -> bool {
    let mut stderr = io::stderr();
    if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
