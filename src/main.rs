//! ListTree CLI - draw trees from flat path listings
//!
//! Usage: listtree <COMMAND>
//!
//! Commands:
//!   render  Render items as a tree
//!   rows    Print the intermediate row table
//!   filter  Keep the items that contain any keyword

mod cli;
mod commands;

use anyhow::{Context as _, Result};
use clap::Parser;

use cli::{Cli, Commands};
use listtree::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let (config, warnings) =
        Config::discover(cli.config.as_deref()).context("Failed to load configuration")?;
    if !cli.json {
        commands::print_config_warnings(&warnings);
    }
    let ctx = commands::Context::new(config, &cli);

    match &cli.command {
        Commands::Render { input, render } => commands::render::cmd_render(&ctx, input, render),
        Commands::Rows { input } => commands::rows::cmd_rows(&ctx, input),
        Commands::Filter {
            input,
            keywords,
            subtree,
            tree,
            render,
        } => commands::filter::cmd_filter(&ctx, input, keywords, *subtree, *tree, render),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose == 1 {
        builder.filter_level(log::LevelFilter::Info);
    } else if verbose >= 2 {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
