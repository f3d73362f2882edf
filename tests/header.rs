use levelup_header::format::{border_line, WIDTH};
use levelup_header::header::{
    assemble_header, assemble_lines, assemble_lines_with_width, line_count, HeaderContext, ART,
};
use levelup_header::style::CommentStyle;

fn context() -> HeaderContext {
    HeaderContext::new("main.js", "ada", "2024-05-01 10:00:00")
}

fn blank(style: &CommentStyle) -> String {
    levelup_header::render_content_line(style, "")
}

#[test]
fn test_block_layout() {
    let style = CommentStyle::Block;
    let lines = assemble_lines(&style, &context());
    assert_eq!(lines.len(), 18);

    let border = format!("/{}/", "*".repeat(77));
    assert_eq!(lines[0], border);
    assert_eq!(lines[1], blank(&style));
    assert_eq!(lines[2], blank(&style));
    assert!(lines[3].starts_with("/*  ▄"));
    assert_eq!(lines[10], blank(&style));
    assert!(lines[11].starts_with("/* File: main.js "));
    assert!(lines[12].starts_with("/* By: ada "));
    assert!(lines[13].starts_with("/* Created: 2024-05-01 10:00:00 "));
    assert!(lines[14].starts_with("/* Updated: 2024-05-01 10:00:00 "));
    assert_eq!(lines[15], blank(&style));
    assert_eq!(lines[16], border);
    assert_eq!(lines[17], "");
}

#[test]
fn test_line_prefixed_layout() {
    let style = CommentStyle::LinePrefixed { mid: "# " };
    let lines = assemble_lines(&style, &context());
    assert_eq!(lines.len(), 17);

    let border = format!("# {}", "*".repeat(77));
    assert_eq!(lines[0], border);
    assert_eq!(lines[1], blank(&style));
    assert!(lines[2].starts_with("#  ▄"));
    assert_eq!(lines[9], blank(&style));
    assert!(lines[10].starts_with("# File: main.js"));
    assert!(lines[13].starts_with("# Updated: "));
    assert_eq!(lines[14], blank(&style));
    assert_eq!(lines[15], border);
    assert_eq!(lines[16], "");
}

#[test]
fn test_html_layout() {
    let style = CommentStyle::Html;
    let lines = assemble_lines(&style, &context());
    assert_eq!(lines.len(), 16);

    let border = format!("<!-- {} -->", "*".repeat(70));
    assert_eq!(lines[0], border);
    assert_eq!(lines[1], blank(&style));
    assert_eq!(lines[9], blank(&style));
    assert!(lines[10].starts_with("<!-- File: main.js"));
    // No spacer between the last field and the closing border
    assert!(lines[13].starts_with("<!-- Updated: "));
    assert_eq!(lines[14], border);
    assert_eq!(lines[15], "");
}

#[test]
fn test_comment_lines_have_full_width() {
    let ctx = HeaderContext::new(
        "an-extremely-long-file-name-that-will-definitely-not-fit-inside-the-header.tsx",
        "someone",
        "2024-05-01 10:00:00",
    );
    for style in [
        CommentStyle::Block,
        CommentStyle::LinePrefixed { mid: "// " },
        CommentStyle::Html,
    ] {
        let lines = assemble_lines(&style, &ctx);
        let (separator, comment_lines) = lines.split_last().unwrap();
        assert_eq!(separator, "");
        for line in comment_lines {
            assert_eq!(line.chars().count(), WIDTH, "{:?}: {:?}", style, line);
        }
    }
}

#[test]
fn test_line_count_independent_of_content() {
    let short = HeaderContext::new("a", "b", "c");
    let long = HeaderContext::new("f".repeat(300), "a".repeat(300), "t".repeat(300));
    for style in [
        CommentStyle::Block,
        CommentStyle::LinePrefixed { mid: "-- " },
        CommentStyle::Html,
    ] {
        let expected = line_count(&style);
        assert_eq!(assemble_lines(&style, &short).len(), expected);
        assert_eq!(assemble_lines(&style, &long).len(), expected);
    }
}

#[test]
fn test_art_rows_in_order() {
    let style = CommentStyle::LinePrefixed { mid: "# " };
    let lines = assemble_lines(&style, &context());
    for (i, row) in ART.iter().enumerate() {
        let rendered = &lines[2 + i];
        let body: String = rendered.chars().skip(2).collect();
        let kept: String = row.chars().take(77).collect();
        assert!(body.starts_with(kept.trim_end()), "art row {}", i);
    }
}

#[test]
fn test_joined_text() {
    let style = CommentStyle::Html;
    let text = assemble_header(&style, &context());
    let border = border_line(&style, WIDTH);

    assert!(text.starts_with(&border));
    assert!(text.ends_with(&format!("{}\n", border)));
    assert_eq!(text.matches('\n').count(), line_count(&style) - 1);
}

#[test]
fn test_assembly_is_deterministic() {
    let style = CommentStyle::Block;
    assert_eq!(
        assemble_header(&style, &context()),
        assemble_header(&style, &context())
    );
}

#[test]
fn test_narrow_width_truncates_art() {
    let lines = assemble_lines_with_width(&CommentStyle::Block, &context(), 20);
    assert_eq!(lines.len(), line_count(&CommentStyle::Block));
    assert_eq!(lines[0], format!("/{}/", "*".repeat(18)));
    assert_eq!(lines[11], "/* File: main.js  */");
}
