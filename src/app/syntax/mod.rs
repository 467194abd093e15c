//! One-shot syntax highlighting for documentation snippets.
//!
//! Produces an FLTK style string (one style char per byte) plus the style
//! table to feed `set_highlight_data`. Snippets are a few dozen lines, so
//! there is no incremental or chunked path; every listing is highlighted
//! whole when its widget is built.

mod style_map;

use fltk::enums::Font;
use fltk::text::StyleTableEntry;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

use style_map::StyleMap;

use super::settings::SyntaxTheme;

pub struct SnippetHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme: SyntaxTheme,
    style_map: StyleMap,
}

impl SnippetHighlighter {
    pub fn new(theme: SyntaxTheme, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme,
            style_map: StyleMap::new(font, font_size),
        }
    }

    /// Switch syntect theme (on dark/light change). Clears the style map so
    /// stale colors do not accumulate in the table.
    pub fn set_theme(&mut self, theme: SyntaxTheme) {
        if self.theme != theme {
            self.theme = theme;
            self.style_map.clear();
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.style_map.update_font_size(size);
    }

    /// Highlight a snippet given its language hint ("bash", "javascript",
    /// "json", ...). Unknown hints fall back to the plain default style.
    /// The returned string has exactly one style char per input byte.
    pub fn highlight(&mut self, code: &str, language: &str) -> String {
        let syntax = match self.syntax_set.find_syntax_by_token(language) {
            Some(s) => s.clone(),
            None => return default_style(code),
        };
        let theme = &self.theme_set.themes[self.theme.theme_key()];
        let mut lines = HighlightLines::new(&syntax, theme);
        let mut style_string = String::with_capacity(code.len());

        for line in LinesWithEndings::new(code) {
            let ranges = match lines.highlight_line(line, &self.syntax_set) {
                Ok(r) => r,
                Err(_) => {
                    // Keep byte parity even if a line fails to parse
                    style_string.extend(std::iter::repeat('A').take(line.len()));
                    continue;
                }
            };
            for (style, piece) in ranges {
                let ch = self.style_map.get_or_insert(style.foreground);
                // One style char per byte (not per char) for UTF-8 correctness
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        style_string
    }

    /// Get the style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }
}

fn default_style(code: &str) -> String {
    std::iter::repeat('A').take(code.len()).collect()
}

/// Iterator that yields lines including their line endings.
struct LinesWithEndings<'a> {
    text: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = self.text.find('\n').map(|i| i + 1).unwrap_or(self.text.len());
        let line = &self.text[..end];
        self.text = &self.text[end..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_string_matches_code_bytes() {
        let mut hl = SnippetHighlighter::new(SyntaxTheme::Base16OceanDark, Font::Courier, 14);
        let code = "npm install build-my-meta\n# comment";
        let styles = hl.highlight(code, "bash");
        assert_eq!(styles.len(), code.len());
    }

    #[test]
    fn test_unknown_language_falls_back_to_default() {
        let mut hl = SnippetHighlighter::new(SyntaxTheme::Base16OceanDark, Font::Courier, 14);
        let code = "whatever text";
        let styles = hl.highlight(code, "not-a-language");
        assert_eq!(styles, "A".repeat(code.len()));
    }

    #[test]
    fn test_json_snippet_uses_multiple_styles() {
        let mut hl = SnippetHighlighter::new(SyntaxTheme::Base16OceanDark, Font::Courier, 14);
        let styles = hl.highlight("{ \"userId\": \"string\" }", "json");
        assert!(styles.chars().collect::<std::collections::HashSet<_>>().len() > 1);
        assert!(hl.style_table().len() > 1);
    }

    #[test]
    fn test_theme_change_clears_style_table() {
        let mut hl = SnippetHighlighter::new(SyntaxTheme::Base16OceanDark, Font::Courier, 14);
        hl.highlight("let x = 1;", "javascript");
        let before = hl.style_table().len();
        assert!(before > 1);

        hl.set_theme(SyntaxTheme::Base16OceanLight);
        assert_eq!(hl.style_table().len(), 1);
    }

    #[test]
    fn test_lines_with_endings_keeps_newlines() {
        let lines: Vec<&str> = LinesWithEndings::new("a\nb\n").collect();
        assert_eq!(lines, vec!["a\n", "b\n"]);
        let lines: Vec<&str> = LinesWithEndings::new("no newline").collect();
        assert_eq!(lines, vec!["no newline"]);
    }
}
