//! levelup-header: fixed-width decorative comment headers
//!
//! The core ([`style`], [`format`], [`header`]) is a set of pure functions
//! that render a banner and metadata block in the comment syntax of a target
//! language. [`host`] and [`config`] bind that core to files on disk and a
//! stored author name.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod header;
pub mod host;
pub mod style;

pub use error::{Error as HeaderError, Result as HeaderResult};

// Re-export commonly used types
pub use format::{render_content_line, WIDTH};
pub use header::{assemble_header, HeaderContext};
pub use host::{insert_header, FileHost, HeaderHost};
pub use style::{resolve_style, CommentStyle};
