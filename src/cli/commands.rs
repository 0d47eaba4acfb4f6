use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Filterable headline reader for the Mediastack news API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the latest headlines using the given filters
    Fetch {
        /// Two-letter country code to restrict results (e.g. us, gb, de)
        #[arg(short, long)]
        country: Option<String>,

        /// Category to restrict results (see `newsdesk categories`)
        #[arg(short = 'g', long)]
        category: Option<String>,

        /// Keyword search across headlines and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Print article records as JSON instead of terminal cards
        #[arg(long)]
        json: bool,
    },

    /// List the supported category names
    Categories,
}
