//! osalau — command-line relay for the Osalausestaja clause segmenter

use clap::Parser;
use osalau_cli::commands::Commands;

/// Relays lines of text through the Osalausestaja clause segmenter
#[derive(Debug, Parser)]
#[command(name = "osalau", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
