use levelup_header::style::{known_languages, language_for_path, resolve_style, CommentStyle};
use std::path::Path;

#[test]
fn test_block_languages() {
    for id in ["c", "cpp", "java", "csharp", "go", "javascript", "typescript", "css", "php"] {
        assert_eq!(resolve_style(id), CommentStyle::Block, "{}", id);
    }
}

#[test]
fn test_line_prefixed_languages() {
    for id in ["python", "shellscript", "ruby", "r"] {
        assert_eq!(resolve_style(id), CommentStyle::LinePrefixed { mid: "# " }, "{}", id);
    }
    for id in ["lua", "sql"] {
        assert_eq!(resolve_style(id), CommentStyle::LinePrefixed { mid: "-- " }, "{}", id);
    }
    for id in ["rust", "swift", "javascriptreact", "typescriptreact"] {
        assert_eq!(resolve_style(id), CommentStyle::LinePrefixed { mid: "// " }, "{}", id);
    }
}

#[test]
fn test_html_languages() {
    assert_eq!(resolve_style("html"), CommentStyle::Html);
    assert_eq!(resolve_style("markdown"), CommentStyle::Html);
}

#[test]
fn test_unknown_languages_default_to_block() {
    for id in ["", "cobol", "Python", "  rust  ", "🦀"] {
        assert_eq!(resolve_style(id), CommentStyle::Block, "{:?}", id);
    }
}

#[test]
fn test_line_prefixes_are_non_empty() {
    for (id, style) in known_languages() {
        if let CommentStyle::LinePrefixed { mid } = style {
            assert!(!mid.is_empty(), "{} has an empty prefix", id);
        }
    }
}

#[test]
fn test_known_languages_sorted() {
    let ids: Vec<_> = known_languages().into_iter().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&"python"));
}

#[test]
fn test_language_for_path() {
    assert_eq!(language_for_path(Path::new("src/main.rs")), Some("rust"));
    assert_eq!(language_for_path(Path::new("script.PY")), Some("python"));
    assert_eq!(language_for_path(Path::new("README.md")), Some("markdown"));
    assert_eq!(language_for_path(Path::new("App.tsx")), Some("typescriptreact"));
    assert_eq!(language_for_path(Path::new("Makefile")), None);
    assert_eq!(language_for_path(Path::new("data.xyz")), None);
}
