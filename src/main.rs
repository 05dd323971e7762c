mod cli;
mod command;
mod config;
mod context;
mod editor;
mod error;
mod git;
mod github;
mod http;
mod hub;
mod logger;
mod pull_request;
mod signal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use command::SystemExecutor;
use config::Config;
use context::RunContext;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let mut args = Args::parse();
    logger::init(args.verbose, args.quiet)?;

    let config = Config::load(args.config.take().as_deref())
        .await
        .context("Cannot load config file")?;

    command::check_binary(&config.git)?;
    command::check_binary(&config.pr_helper)?;

    let context = RunContext::new(SystemExecutor, config);
    let run = pull_request::open(&context, args.into());
    let number = signal::until_interrupted(run, tokio::signal::ctrl_c()).await?;

    println!("{}", pull_request::confirmation(number));

    Ok(())
}
