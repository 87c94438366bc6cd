//! Markdown and Highlighting
//!
//! - Markdown to HTML (pulldown-cmark) for static page copy
//! - JSON syntax highlighting (syntect) for probe response bodies

use pulldown_cmark::{html::push_html, Options, Parser};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Highlight a JSON document as HTML, `None` if highlighting is unavailable
pub fn highlight_json(code: &str) -> Option<String> {
    let ss = get_syntax_set();
    let syntax = ss
        .find_syntax_by_extension("json")
        .unwrap_or_else(|| ss.find_syntax_plain_text());
    let theme = get_theme()?;
    highlighted_html_for_string(code, ss, syntax, theme).ok()
}

/// Copy of the About tab
pub const ABOUT_MARKDOWN: &str = "\
This page demonstrates:

- Tab navigation
- Local storage persistence
- Theme switching
- Modal dialogs
- Todo list functionality
- Responsive design

Built with Leptos and Rust, compiled to WebAssembly.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_renders_list() {
        let html = parse_markdown(ABOUT_MARKDOWN);
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Tab navigation</li>"));
        assert!(html.contains("<p>This page demonstrates:</p>"));
    }

    #[test]
    fn test_highlight_json() {
        let html = highlight_json("{\n  \"fact\": \"Cats sleep\"\n}").expect("highlighter available");
        assert!(html.starts_with("<pre"));
        assert!(html.contains("fact"));
        assert!(html.contains("Cats sleep"));
    }
}
