use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::prompt_line;
use std::io;
use std::path::Path;

use super::utils;

/// Run the set-author subcommand, prompting when no name is given
pub fn set_author(name: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let name = match name {
        Some(name) => name.trim().to_string(),
        None => prompt_line(
            &mut io::stdin().lock(),
            &mut io::stderr(),
            "New name to use in headers: ",
        )?,
    };

    if name.is_empty() {
        log::warn!("No author entered, keeping the stored one");
        return Err(Error::EmptyInput {
            what: "author".to_string(),
        });
    }

    let path = utils::config_path(config_path);
    let mut config = Config::load(&path)?;
    config.set_author(name.as_str());
    config.save(&path)?;

    log::info!("Saved author {:?} to {}", name, path.display());
    eprintln!("Author updated: {}", name);
    Ok(())
}

/// Run the show-author subcommand
pub fn show_author(config_path: Option<&Path>) -> Result<()> {
    let path = utils::config_path(config_path);
    match Config::load(&path)?.author() {
        Some(author) => println!("{}", author),
        None => eprintln!("No author set ({})", path.display()),
    }
    Ok(())
}
