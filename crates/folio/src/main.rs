mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::{logging, App, Config};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Folio - inspect and exercise the portal's route table", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "folio.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in evaluation order
    Routes,

    /// Resolve a single path
    Resolve {
        /// Path to resolve, optionally with ?query and #hash
        path: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Push paths through a navigator; `:back` and `:forward` walk the history
    Navigate {
        #[arg(required = true)]
        steps: Vec<String>,
    },

    /// Build the path of a named route
    Href {
        /// Route name, e.g. user-detail
        name: String,

        /// Parameters as key=value
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    logging::init(&config.log.level)?;

    let app = App::from_config(config)?;

    match cli.command {
        Commands::Routes => commands::routes::execute(&app),
        Commands::Resolve { path, json } => commands::resolve::execute(&app, &path, json),
        Commands::Navigate { steps } => commands::navigate::execute(&app, &steps),
        Commands::Href { name, params } => commands::href::execute(&app, &name, &params),
    }
}
