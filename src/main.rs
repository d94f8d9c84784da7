use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

use terminal_image::{app, cli::Args, config::Settings};

fn main() -> Result<ExitCode> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let mut out = io::stdout().lock();
            let status = app::report_usage(&mut out, &err)?;
            out.flush()?;
            return Ok(status.into());
        }
    };
    init_logging(args.verbose);

    let settings = Settings::from_env();
    enable_ansi_support();

    let cwd = std::env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let status = app::execute(&args, &settings, &cwd, &mut out)?;
    out.flush()?;

    Ok(status.into())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("terminal_image", LevelFilter::Debug);
    }
    builder.init();
}

#[cfg(windows)]
fn enable_ansi_support() {
    // Windows consoles need VT processing switched on before escapes render
    if !crossterm::ansi_support::supports_ansi() {
        log::debug!("Console does not support ANSI escape sequences");
    }
}

#[cfg(not(windows))]
fn enable_ansi_support() {}
