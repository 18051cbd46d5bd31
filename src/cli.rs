use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lupa",
    about = "Typo-tolerant catalog search with tiered exact/fuzzy matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog for entries matching a free-text query
    Search {
        /// The query; typos within the edit budget still match
        query: String,

        /// Path to the catalog JSON file
        #[arg(short, long, default_value = "data/catalog.json")]
        catalog: String,
    },

    /// Show every catalog entry (the empty-query default view)
    List {
        /// Path to the catalog JSON file
        #[arg(short, long, default_value = "data/catalog.json")]
        catalog: String,
    },
}
