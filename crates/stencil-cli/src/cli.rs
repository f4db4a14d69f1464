use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author = "bahdotsh",
    version = env!("CARGO_PKG_VERSION"),
    about = "stencil - templated text snippets with fuzzy search",
    long_about = "stencil stores templated text snippets, searches them by fuzzy match, \
                  fills in their placeholder variables, and renders them to final text."
)]
pub struct Stencil {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Snippet directory (defaults to $STENCIL_SNIPPETS, then ~/.stencil/snippets)
    #[clap(long, short, global = true)]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every snippet under the snippet directory
    List {
        #[clap(long, help = "Print machine-readable JSON summaries")]
        json: bool,
    },
    /// Search snippets by fuzzy match, best match first
    Search {
        #[clap(help = "Query text")]
        query: String,

        #[clap(long, help = "Print machine-readable JSON summaries")]
        json: bool,
    },
    /// Show the placeholder variables declared by a snippet document
    Vars {
        #[clap(help = "Path to the snippet document")]
        file: PathBuf,
    },
    /// Render a snippet document to stdout
    Render {
        #[clap(help = "Path to the snippet document")]
        file: PathBuf,

        #[clap(
            long = "set",
            short = 's',
            value_name = "NAME=VALUE",
            help = "Assign a variable before rendering (repeatable)"
        )]
        set: Vec<String>,

        #[clap(long, short, help = "Prompt for unresolved variables before rendering")]
        interactive: bool,
    },
}
