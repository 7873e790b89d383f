use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ferret",
    about = "Search a content index the way the site's search modal does",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the index and print ranked, highlighted results
    Search {
        /// Path to the search.json index file
        #[arg(short, long)]
        index: String,

        /// Active locale for post filtering
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Show at most this many results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// The search query
        query: String,
    },

    /// Inspect an index file: entry counts per locale and kind
    Inspect {
        /// Path to the search.json index file
        index: String,
    },
}
