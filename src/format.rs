//! Line formatter
//!
//! Pure functions that turn one logical line of content into a comment line
//! of fixed width. Content longer than the usable width is cut, shorter
//! content is right-padded with spaces. Widths are counted in chars.

use crate::style::{CommentStyle, BLOCK_CLOSE, BLOCK_OPEN, HTML_CLOSE, HTML_OPEN};

/// Total width of every rendered header line
pub const WIDTH: usize = 79;

/// Cut `content` to at most `max` chars and pad it with spaces to exactly `max`
fn fit(content: &str, max: usize) -> String {
    let mut fitted: String = content.chars().take(max).collect();
    let used = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(max.saturating_sub(used)));
    fitted
}

/// `/* content */` at the default width
pub fn format_block_line(content: &str) -> String {
    format_block_line_with_width(content, WIDTH)
}

pub fn format_block_line_with_width(content: &str, width: usize) -> String {
    let usable = CommentStyle::Block.usable_width(width);
    format!("{}{}{}", BLOCK_OPEN, fit(content, usable), BLOCK_CLOSE)
}

/// `mid` followed by content, no closing delimiter
pub fn format_line_comment(content: &str, mid: &str) -> String {
    format_line_comment_with_width(content, mid, WIDTH)
}

pub fn format_line_comment_with_width(content: &str, mid: &str, width: usize) -> String {
    let usable = width.saturating_sub(mid.chars().count());
    format!("{}{}", mid, fit(content, usable))
}

/// `<!-- content -->` at the default width
pub fn format_html_line(content: &str) -> String {
    format_html_line_with_width(content, WIDTH)
}

pub fn format_html_line_with_width(content: &str, width: usize) -> String {
    let usable = CommentStyle::Html.usable_width(width);
    format!("{}{}{}", HTML_OPEN, fit(content, usable), HTML_CLOSE)
}

/// Render `content` through the formatter matching `style`
pub fn render_content_line(style: &CommentStyle, content: &str) -> String {
    render_content_line_with_width(style, content, WIDTH)
}

pub fn render_content_line_with_width(style: &CommentStyle, content: &str, width: usize) -> String {
    match style {
        CommentStyle::Block => format_block_line_with_width(content, width),
        CommentStyle::LinePrefixed { mid } => format_line_comment_with_width(content, mid, width),
        CommentStyle::Html => format_html_line_with_width(content, width),
    }
}

/// Full-width rule of asterisks framing the header
///
/// Block style closes the rule with slashes (`/****/`). The other styles
/// send a run of asterisks through their content formatter so the rule lines
/// up with the content lines. The HTML rule is therefore `width - 9` stars.
pub fn border_line(style: &CommentStyle, width: usize) -> String {
    match style {
        CommentStyle::Block => format!("/{}/", "*".repeat(width.saturating_sub(2))),
        _ => {
            let stars = "*".repeat(style.usable_width(width));
            render_content_line_with_width(style, &stars, width)
        }
    }
}
