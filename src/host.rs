//! Host binding
//!
//! The header core is pure. Everything effectful (finding out who the author
//! is, writing into a document) goes through [`HeaderHost`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::header::{assemble_header, HeaderContext, TIMESTAMP_FORMAT};
use crate::style::resolve_style;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Effects the header core needs from its environment
pub trait HeaderHost {
    /// Author name, prompting for it when none is known yet
    fn author(&mut self) -> Result<String>;

    /// Insert `text` at line 0, column 0 of the current document
    fn insert_at_start(&mut self, text: &str) -> Result<()>;
}

/// Current UTC time in the header timestamp layout
pub fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Final path component, used as the `File:` field
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Resolve the style, assemble the header and hand it to `host`
///
/// Returns the inserted text.
pub fn insert_header<H: HeaderHost + ?Sized>(
    host: &mut H,
    language_id: &str,
    file_name: &str,
    timestamp: &str,
) -> Result<String> {
    let author = host.author()?;
    let style = resolve_style(language_id);
    log::debug!("Language {:?} uses {} comments", language_id, style);

    let ctx = HeaderContext::new(file_name, author, timestamp);
    let header = assemble_header(&style, &ctx);
    host.insert_at_start(&header)?;
    Ok(header)
}

/// Ask for a single line of input, returning it trimmed
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Get the stored author or prompt for one, persisting a non-empty answer
pub fn get_or_prompt_author<R: BufRead, W: Write>(
    config_path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let mut config = Config::load(config_path)?;
    if let Some(author) = config.author() {
        return Ok(author.to_string());
    }

    let answer = prompt_line(input, output, "Enter your name (used in headers): ")?;
    if answer.is_empty() {
        log::warn!("No author entered");
        return Err(Error::MissingAuthor);
    }

    config.set_author(answer.as_str());
    config.save(config_path)?;
    log::info!("Saved author {:?} to {}", answer, config_path.display());
    Ok(answer)
}

/// Byte order mark kept ahead of the header
const BOM: &str = "\u{feff}";

/// A file on disk standing in for the editor's active document
pub struct FileHost<R, W> {
    path: PathBuf,
    config_path: PathBuf,
    author_override: Option<String>,
    dry_run: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> FileHost<R, W> {
    /// Host for `path`. Prompts are written to `output` and answered from `input`.
    pub fn new(
        path: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            path: path.into(),
            config_path: config_path.into(),
            author_override: None,
            dry_run: false,
            input,
            output,
        }
    }

    /// Use `author` instead of the stored one, without touching the config
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author_override = author.filter(|name| !name.trim().is_empty());
        self
    }

    /// Check the document exists but leave it unmodified
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: BufRead, W: Write> HeaderHost for FileHost<R, W> {
    fn author(&mut self) -> Result<String> {
        if let Some(author) = &self.author_override {
            return Ok(author.trim().to_string());
        }
        get_or_prompt_author(&self.config_path, &mut self.input, &mut self.output)
    }

    fn insert_at_start(&mut self, text: &str) -> Result<()> {
        if !self.path.is_file() {
            return Err(Error::DocumentNotFound {
                path: self.path.clone(),
            });
        }

        if self.dry_run {
            log::debug!("Dry run, leaving {} untouched", self.path.display());
            return Ok(());
        }

        let existing = fs::read_to_string(&self.path)?;
        let (bom, body) = match existing.strip_prefix(BOM) {
            Some(body) => (BOM, body),
            None => ("", existing.as_str()),
        };
        let mut content = String::with_capacity(bom.len() + text.len() + body.len());
        content.push_str(bom);
        content.push_str(text);
        content.push_str(body);

        // Write through the original path so symlinks, inode and mode survive
        fs::write(&self.path, content)?;
        log::debug!("Inserted {} bytes into {}", text.len(), self.path.display());
        Ok(())
    }
}
