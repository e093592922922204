mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            categories,
            data_dir,
            target,
        } => {
            commands::generate::handle(categories, data_dir, target)?;
        }

        Commands::Configure {
            data_dir,
            target,
            show,
        } => {
            commands::configure::handle(data_dir, target, show)?;
        }

        Commands::List => {
            commands::list::handle()?;
        }
    }

    Ok(())
}
