use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod error;
mod input;
mod subcommands;

/// Inspect how a weekly course presents its sections to a viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every section of the course page
    Classify(subcommands::classify::Args),
    /// Resolve the previous/next links around a section
    Nav(subcommands::nav::Args),
    /// Resolve the single-section page of a section
    Page(subcommands::page::Args),
    /// Print the weekly dates of every section
    Schedule(subcommands::schedule::Args),
}

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Classify(args) => subcommands::classify::run(&args),
        Command::Nav(args) => subcommands::nav::run(&args),
        Command::Page(args) => subcommands::page::run(&args),
        Command::Schedule(args) => subcommands::schedule::run(&args),
    }
}
