use crate::error::{Error, Result};
use crate::header::{assemble_header, HeaderContext};
use crate::host::now_timestamp;
use crate::style::resolve_style;
use std::path::Path;

use super::utils;

/// Run the render subcommand: print a header without touching any document
pub fn render(
    language: &str,
    file_name: &str,
    author: &str,
    timestamp: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let author = author.trim();
    if author.is_empty() {
        return Err(Error::MissingAuthor);
    }

    let style = resolve_style(&language.trim().to_ascii_lowercase());
    let timestamp = timestamp.map(str::to_string).unwrap_or_else(now_timestamp);
    let ctx = HeaderContext::new(file_name, author, timestamp);

    utils::write_output(&assemble_header(&style, &ctx), output)
}
