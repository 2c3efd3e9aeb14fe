//! Markdown rendering for transcript bubbles.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};

static OPTIONS: Lazy<Options> = Lazy::new(|| {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
});

/// Renders a markdown fragment to HTML for an `inner_html` bubble.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, *OPTIONS);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        let html = render_markdown("# Research Main Information");
        assert!(html.contains("<h1>Research Main Information</h1>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| Study | Year |\n| --- | --- |\n| A | 2020 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>A</td>"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
    }
}
