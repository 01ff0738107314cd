use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use varposter_cli::cli::Cli;

fn main() -> Result<()> {
    let env = Env::default().default_filter_or("warn");
    Builder::from_env(env).init();
    Cli::parse().command.run()
}
