use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;

use levelup_header::cli;

#[derive(Parser)]
#[command(name = "levelup-header")]
#[command(about = "Insert fixed-width decorative comment headers into source files")]
#[command(version)]
struct Cli {
    /// Config file holding the stored author (defaults to $LEVELUP_HEADER_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert a header at the top of a file
    Insert {
        /// File to modify
        input: PathBuf,

        /// Language id (detected from the file extension if not specified)
        #[arg(short, long)]
        language: Option<String>,

        /// Author name (defaults to the stored one, prompting if unset)
        #[arg(short, long)]
        author: Option<String>,

        /// Timestamp for the Created/Updated fields (defaults to now, UTC)
        #[arg(long)]
        timestamp: Option<String>,

        /// Print the header instead of modifying the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a header for the given values without touching any file
    Render {
        /// Language id
        #[arg(short, long, default_value = "")]
        language: String,

        /// File name shown in the header
        #[arg(short, long, default_value = "untitled")]
        file_name: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Timestamp for the Created/Updated fields (defaults to now, UTC)
        #[arg(long)]
        timestamp: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store the author name used in headers
    SetAuthor {
        /// New name (prompted for if not specified)
        name: Option<String>,
    },

    /// Print the stored author name
    ShowAuthor,

    /// List language ids and their comment styles
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Commands::Insert {
            input,
            language,
            author,
            timestamp,
            dry_run,
        } => {
            let args = cli::insert::InsertArgs {
                input_path: input,
                language,
                author,
                timestamp,
                dry_run,
                config_path: config,
            };
            cli::insert::insert(&args)?;
        }
        Commands::Render {
            language,
            file_name,
            author,
            timestamp,
            output,
        } => cli::render::render(
            &language,
            &file_name,
            &author,
            timestamp.as_deref(),
            output.as_deref(),
        )?,
        Commands::SetAuthor { name } => {
            cli::author::set_author(name.as_deref(), config.as_deref())?
        }
        Commands::ShowAuthor => cli::author::show_author(config.as_deref())?,
        Commands::Languages { json } => cli::languages::languages(json)?,
    }

    Ok(())
}
