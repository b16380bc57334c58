use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod develop;
mod logger;

fn main() -> Result<ExitCode> {
    logger::init();
    let Some(args) = cli::Cli::parse().into_develop_args() else {
        eprintln!("{}", cli::Cli::command().render_usage());
        return Ok(ExitCode::FAILURE);
    };
    let out = develop::run(&args)?;
    println!("{}", out.display());
    Ok(ExitCode::SUCCESS)
}
