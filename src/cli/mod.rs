//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod author;
pub mod insert;
pub mod languages;
pub mod render;

/// Common CLI utilities
pub mod utils {
    use crate::config::Config;
    use crate::error::Result;
    use std::path::{Path, PathBuf};

    /// Config path from the command line, falling back to the default location
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_path);
        log::debug!("Config path: {}", path.display());
        path
    }

    /// Write output to file or stdout
    pub fn write_output(content: &str, output_path: Option<&Path>) -> Result<()> {
        match output_path {
            Some(path) => Ok(std::fs::write(path, content)?),
            None => {
                print!("{}", content);
                Ok(())
            }
        }
    }
}
