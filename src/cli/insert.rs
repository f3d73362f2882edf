use crate::error::{Error, Result};
use crate::host::{display_file_name, insert_header, now_timestamp, FileHost};
use crate::style::language_for_path;
use std::io;
use std::path::PathBuf;

use super::utils;

/// Arguments for the insert command
#[derive(Debug, Clone)]
pub struct InsertArgs {
    pub input_path: PathBuf,
    pub language: Option<String>,
    pub author: Option<String>,
    pub timestamp: Option<String>,
    pub dry_run: bool,
    pub config_path: Option<PathBuf>,
}

impl InsertArgs {
    /// Language id from `--language`, else guessed from the file extension
    pub fn language_id(&self) -> String {
        if let Some(language) = &self.language {
            return language.trim().to_ascii_lowercase();
        }
        match language_for_path(&self.input_path) {
            Some(language) => language.to_string(),
            None => {
                log::warn!(
                    "Unknown file type for {}, using block comments",
                    self.input_path.display()
                );
                String::new()
            }
        }
    }
}

/// Run the insert subcommand
pub fn insert(args: &InsertArgs) -> Result<()> {
    if !args.input_path.is_file() {
        return Err(Error::DocumentNotFound {
            path: args.input_path.clone(),
        });
    }

    let config_path = utils::config_path(args.config_path.as_deref());
    let stdin = io::stdin();
    let mut host = FileHost::new(&args.input_path, config_path, stdin.lock(), io::stderr())
        .with_author(args.author.clone())
        .with_dry_run(args.dry_run);

    let language_id = args.language_id();
    let file_name = display_file_name(&args.input_path);
    let timestamp = args.timestamp.clone().unwrap_or_else(now_timestamp);

    let header = insert_header(&mut host, &language_id, &file_name, &timestamp)?;

    if args.dry_run {
        utils::write_output(&header, None)
    } else {
        eprintln!("Header inserted into {}", host.path().display());
        Ok(())
    }
}
