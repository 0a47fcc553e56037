//! # vitrail
//!
//! Vitrail - Vue component option resolution engine.
//!
//! ## Name Origin
//!
//! **Vitrail** (/vi.tʁaj/) is French for a stained-glass window: panes of
//! glass held together by lead caming into one picture, the way component
//! options compose through mixins and extends into one template surface.
//! This crate is the command-line gateway to the resolution engine.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vitrail")]
#[command(about = "Vue component option resolution engine", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Log traversal and resolution events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every attribute a component's template can use
    #[command(visible_alias = "attrs")]
    Attributes(commands::attributes::AttributesArgs),

    /// Resolve one template attribute to its declaration
    Resolve(commands::resolve::ResolveArgs),

    /// List the components a component can use locally
    Components(commands::components::ComponentsArgs),

    /// Print the configuration file JSON Schema
    Schema(commands::schema::SchemaArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Attributes(args) => commands::attributes::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Components(args) => commands::components::run(args),
        Commands::Schema(args) => commands::schema::run(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
