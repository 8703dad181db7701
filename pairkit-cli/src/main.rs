use anyhow::{Context, Result};
use clap::Parser;
use pairkit_core::{Config, OutputFormat};
use std::process;

mod cli;
mod convert;
mod pairs;
mod rename;
mod replace;
mod trigger;

use cli::{Cli, Commands, OutputFormatArg};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_default();

    let output: OutputFormat = cli
        .output
        .unwrap_or_else(|| OutputFormatArg::from_config(&config.defaults.output))
        .into();
    let quiet = cli.quiet;

    let result = run(cli.command, &config, output, quiet);
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands, config: &Config, output: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        Commands::Rename {
            prefix,
            path,
            no_create_missing,
            dry_run,
        } => {
            let prefix = prefix
                .or_else(|| config.defaults.prefix.clone())
                .context("no prefix given and no defaults.prefix in .pairkit.toml")?;
            let create_missing = !no_create_missing && config.defaults.create_missing_captions;
            rename::handle_rename(&prefix, &path, create_missing, dry_run, output, quiet)
        },
        Commands::Trigger {
            trigger,
            path,
            file,
        } => trigger::handle_trigger(&trigger, &path, file.as_deref(), output, quiet),
        Commands::Replace {
            find,
            replace,
            path,
            file,
        } => replace::handle_replace(&find, &replace, &path, file.as_deref(), output, quiet),
        Commands::Pairs {
            path,
            create_missing,
        } => pairs::handle_pairs(&path, create_missing, output, quiet),
        Commands::Convert { path } => convert::handle_convert(&path, output, quiet),
    }
}
