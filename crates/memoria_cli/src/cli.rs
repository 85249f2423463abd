//! Command-line surface and configuration.
//!
//! Flags fall back to `MEMORIA_*` environment variables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memoria", version, about = "Personal scrapbook archive")]
pub struct Cli {
    /// Archive document path.
    #[arg(long, env = "MEMORIA_DATA", default_value = "data.json")]
    pub data: PathBuf,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "MEMORIA_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Absolute log directory; file logging is off when unset.
    #[arg(long, env = "MEMORIA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print sections with their widgets.
    List,
    /// Print the raw archive document.
    Dump,
    /// Add a photo memory to the section in view.
    AddMemory {
        #[arg(long, default_value = "")]
        caption: String,
        /// Encoded image, stored verbatim.
        #[arg(long, default_value = "")]
        image_data: String,
        /// Divider currently in view.
        #[arg(long)]
        visible: Option<String>,
    },
    /// Add a thought to the section in view.
    AddThought {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        flavor: String,
        #[arg(long)]
        visible: Option<String>,
    },
    /// Append a divider.
    AddDivider {
        #[arg(default_value = "")]
        label: String,
    },
    /// Merge a JSON field patch onto one item.
    Update { id: String, patch: String },
    Resize { id: String, width: u32, height: u32 },
    /// Collapse or expand a divider.
    Toggle { id: String },
    Delete { id: String },
    /// Drop one item before or after another.
    Move {
        dragged: String,
        target: String,
        #[arg(long, default_value = "after")]
        position: String,
    },
    /// Divider navigator, optionally filtered.
    Nav {
        #[arg(default_value = "")]
        query: String,
    },
    /// Pick a carousel widget and a caption.
    Hero,
    #[command(subcommand)]
    Phrase(PhraseCommand),
}

#[derive(Subcommand, Debug)]
pub enum PhraseCommand {
    List,
    Add { text: String },
    Remove { index: usize },
}
