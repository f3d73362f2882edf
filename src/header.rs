//! Header assembler
//!
//! Composes the border, spacer lines, the banner art and the metadata fields
//! into the ordered list of comment lines inserted at the top of a document.

use crate::format::{border_line, render_content_line_with_width, WIDTH};
use crate::style::CommentStyle;

/// Banner art, authored for a 79 column header
pub const ART: [&str; 7] = [
    " ▄                           ▀▀█    ▄    ▄          ▄▄▄             █        ",
    " █       ▄▄▄   ▄   ▄   ▄▄▄     █    █    █ ▄▄▄▄   ▄▀   ▀  ▄▄▄    ▄▄▄█   ▄▄▄  ",
    " █      █▀  █  ▀▄ ▄▀  █▀  █    █    █    █ █▀ ▀█  █      █▀ ▀█  █▀ ▀█  █▀  █ ",
    " █      █▀▀▀▀   █▄█   █▀▀▀▀    █    █    █ █   █  █      █   █  █   █  █▀▀▀▀ ",
    " █▄▄▄▄▄ ▀█▄▄▀    █    ▀█▄▄▀    ▀▄▄  ▀▄▄▄▄▀ ██▄█▀   ▀▄▄▄▀ ▀█▄█▀  ▀█▄██  ▀█▄▄▀ ",
    "                                           █                                 ",
    "                                           ▀                                 ",
];

/// Timestamp layout expected in the metadata fields
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-insertion values shown in the metadata block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    pub file_name: String,
    pub author: String,
    pub created: String,
    pub updated: String,
}

impl HeaderContext {
    /// Context for a first insertion, where created and updated are the same instant
    pub fn new(
        file_name: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        let created = timestamp.into();
        Self {
            file_name: file_name.into(),
            author: author.into(),
            updated: created.clone(),
            created,
        }
    }

    fn fields(&self) -> [String; 4] {
        [
            format!("File: {}", self.file_name),
            format!("By: {}", self.author),
            format!("Created: {}", self.created),
            format!("Updated: {}", self.updated),
        ]
    }
}

/// Build every header line at the default width
///
/// The last entry is an empty separator so the joined text ends with a newline.
pub fn assemble_lines(style: &CommentStyle, ctx: &HeaderContext) -> Vec<String> {
    assemble_lines_with_width(style, ctx, WIDTH)
}

pub fn assemble_lines_with_width(
    style: &CommentStyle,
    ctx: &HeaderContext,
    width: usize,
) -> Vec<String> {
    let line = |content: &str| render_content_line_with_width(style, content, width);
    let border = border_line(style, width);

    let mut lines = Vec::with_capacity(line_count(style));
    lines.push(border.clone());
    lines.push(line(""));
    if *style == CommentStyle::Block {
        // Extra spacer under the top border
        lines.push(line(""));
    }
    lines.extend(ART.iter().map(|row| line(*row)));
    lines.push(line(""));
    lines.extend(ctx.fields().iter().map(|field| line(field.as_str())));
    if *style != CommentStyle::Html {
        lines.push(line(""));
    }
    lines.push(border);
    lines.push(String::new());
    lines
}

/// Number of entries [`assemble_lines`] yields for `style`, separator included
pub fn line_count(style: &CommentStyle) -> usize {
    let fixed = 1 + 1 + ART.len() + 1 + 4 + 1 + 1;
    match style {
        CommentStyle::Block => fixed + 2,
        CommentStyle::LinePrefixed { .. } => fixed + 1,
        CommentStyle::Html => fixed,
    }
}

/// Complete header text, lines joined with `\n`
pub fn assemble_header(style: &CommentStyle, ctx: &HeaderContext) -> String {
    assemble_lines(style, ctx).join("\n")
}
