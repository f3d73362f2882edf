//! Comment-style registry
//!
//! Maps an editor language identifier to the comment convention used to
//! wrap every header line. The table is constant data built once on first use.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Comment delimiter convention for a target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommentStyle {
    /// `/* ... */`
    #[default]
    Block,
    /// A prefix such as `# ` repeated on every line, no closing delimiter
    LinePrefixed {
        /// Exact prefix placed before the content, trailing space included
        mid: &'static str,
    },
    /// `<!-- ... -->`
    Html,
}

pub const BLOCK_OPEN: &str = "/* ";
pub const BLOCK_CLOSE: &str = " */";
pub const HTML_OPEN: &str = "<!-- ";
pub const HTML_CLOSE: &str = " -->";

impl CommentStyle {
    /// Number of characters the style's delimiters occupy on one line
    pub fn control_width(&self) -> usize {
        match self {
            CommentStyle::Block => BLOCK_OPEN.chars().count() + BLOCK_CLOSE.chars().count(),
            CommentStyle::LinePrefixed { mid } => mid.chars().count(),
            CommentStyle::Html => HTML_OPEN.chars().count() + HTML_CLOSE.chars().count(),
        }
    }

    /// Characters left for content on a line of `width` characters
    pub fn usable_width(&self, width: usize) -> usize {
        width.saturating_sub(self.control_width())
    }

    /// Opening delimiter that precedes content
    pub fn opener(&self) -> &'static str {
        match self {
            CommentStyle::Block => BLOCK_OPEN,
            CommentStyle::LinePrefixed { mid } => *mid,
            CommentStyle::Html => HTML_OPEN,
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentStyle::Block => write!(f, "block (/* */)"),
            CommentStyle::LinePrefixed { mid } => write!(f, "line ({:?})", mid),
            CommentStyle::Html => write!(f, "html (<!-- -->)"),
        }
    }
}

const HASH: CommentStyle = CommentStyle::LinePrefixed { mid: "# " };
const DASH: CommentStyle = CommentStyle::LinePrefixed { mid: "-- " };
const SLASH: CommentStyle = CommentStyle::LinePrefixed { mid: "// " };

static STYLES: Lazy<HashMap<&'static str, CommentStyle>> = Lazy::new(|| {
    let entries: &[(&str, CommentStyle)] = &[
        ("c", CommentStyle::Block),
        ("cpp", CommentStyle::Block),
        ("java", CommentStyle::Block),
        ("csharp", CommentStyle::Block),
        ("go", CommentStyle::Block),
        ("javascript", CommentStyle::Block),
        ("typescript", CommentStyle::Block),
        ("css", CommentStyle::Block),
        ("php", CommentStyle::Block),
        ("python", HASH),
        ("shellscript", HASH),
        ("shell", HASH),
        ("ruby", HASH),
        ("r", HASH),
        ("lua", DASH),
        ("sql", DASH),
        ("rust", SLASH),
        ("swift", SLASH),
        ("javascriptreact", SLASH),
        ("typescriptreact", SLASH),
        ("jsx", SLASH),
        ("tsx", SLASH),
        ("html", CommentStyle::Html),
        ("markdown", CommentStyle::Html),
    ];
    entries.iter().copied().collect()
});

static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&[&str], &str)] = &[
        (&["c", "h"], "c"),
        (&["cc", "cpp", "cxx", "hpp"], "cpp"),
        (&["java"], "java"),
        (&["cs"], "csharp"),
        (&["go"], "go"),
        (&["js", "mjs", "cjs"], "javascript"),
        (&["ts"], "typescript"),
        (&["css"], "css"),
        (&["php"], "php"),
        (&["py"], "python"),
        (&["sh", "bash", "zsh"], "shellscript"),
        (&["rb"], "ruby"),
        (&["r"], "r"),
        (&["lua"], "lua"),
        (&["sql"], "sql"),
        (&["jsx"], "javascriptreact"),
        (&["tsx"], "typescriptreact"),
        (&["rs"], "rust"),
        (&["swift"], "swift"),
        (&["html", "htm"], "html"),
        (&["md", "markdown"], "markdown"),
    ];
    entries
        .iter()
        .flat_map(|(exts, lang)| exts.iter().map(move |ext| (*ext, *lang)))
        .collect()
});

/// Resolve the comment style for a language id. Unknown ids get [`CommentStyle::Block`].
pub fn resolve_style(language_id: &str) -> CommentStyle {
    STYLES.get(language_id).copied().unwrap_or_default()
}

/// All registered language ids with their styles, sorted by id
pub fn known_languages() -> Vec<(&'static str, CommentStyle)> {
    let mut languages: Vec<_> = STYLES.iter().map(|(id, style)| (*id, *style)).collect();
    languages.sort_by_key(|(id, _)| *id);
    languages
}

/// Guess a language id from a file's extension
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS.get(ext.as_str()).copied()
}
