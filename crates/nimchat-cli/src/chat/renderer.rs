//! Terminal markdown rendering with syntax-highlighted code blocks.
//!
//! `ChatRenderer` renders prose through `termimad` and fenced code through
//! `syntect`, then frames the reply with an `Assistant:` header and a
//! separator rule.

use crossterm::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

/// Width of the separator printed after each reply.
pub const SEPARATOR_WIDTH: usize = 50;

const CODE_THEME: &str = "base16-ocean.dark";

/// Terminal markdown renderer with syntax highlighting.
pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ChatRenderer {
    /// Create a renderer; `accent` colors headers and bold text.
    pub fn new(accent: Option<Color>) -> Self {
        let mut skin = MadSkin::default_dark();

        if let Some(color) = accent {
            let tc = Self::crossterm_to_termimad(color);
            skin.bold.set_fg(tc);
            skin.headers[0].set_fg(tc);
            skin.headers[1].set_fg(tc);
        }

        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// The full block printed for one assistant reply: header, rendered
    /// markdown, separator rule and a trailing blank line.
    pub fn reply_block(&self, reply: &str) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!(
            "{}\n",
            console::style("Assistant:").color256(117).bold()
        ));
        let body = self.render_markdown(reply);
        out.push_str(&body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&Self::separator());
        out.push_str("\n\n");
        out
    }

    /// The separator rule printed after each reply.
    pub fn separator() -> String {
        "-".repeat(SEPARATOR_WIDTH)
    }

    /// Render markdown to ANSI text.
    ///
    /// Prose between code fences is rendered as one block so lists and
    /// tables keep their layout; fenced code is highlighted by language tag.
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut output = String::new();
        let mut prose = String::new();
        let mut code: Option<(String, String)> = None;

        for line in markdown.lines() {
            if line.trim_start().starts_with("```") {
                match code.take() {
                    None => {
                        self.flush_prose(&mut prose, &mut output);
                        let lang = line.trim_start().trim_start_matches('`').trim();
                        code = Some((lang.to_string(), String::new()));
                    }
                    Some((lang, buf)) => output.push_str(&self.highlight_code(&buf, &lang)),
                }
            } else if let Some((_, buf)) = code.as_mut() {
                buf.push_str(line);
                buf.push('\n');
            } else {
                prose.push_str(line);
                prose.push('\n');
            }
        }

        // Unclosed fence: still show what arrived.
        if let Some((lang, buf)) = code {
            if !buf.is_empty() {
                output.push_str(&self.highlight_code(&buf, &lang));
            }
        }
        self.flush_prose(&mut prose, &mut output);

        output
    }

    fn flush_prose(&self, prose: &mut String, output: &mut String) {
        if prose.trim().is_empty() {
            prose.clear();
            return;
        }
        output.push_str(&self.skin.term_text(prose).to_string());
        prose.clear();
    }

    /// Highlight a code block using syntect.
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let mut output = String::new();
        let label = if lang.is_empty() { "code" } else { lang };
        output.push_str(&format!("  {}\n", console::style(format!("--- {label} ---")).dim()));

        let Some(theme) = self.theme_set.themes.get(CODE_THEME) else {
            for line in code.lines() {
                output.push_str(&format!("  {line}\n"));
            }
            return output;
        };

        let mut h = HighlightLines::new(syntax, theme);
        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("  {escaped}\x1b[0m\n"));
        }

        output
    }

    /// Convert a crossterm Color to termimad Color.
    fn crossterm_to_termimad(color: Color) -> termimad::crossterm::style::Color {
        match color {
            Color::Cyan => termimad::crossterm::style::Color::Cyan,
            Color::Green => termimad::crossterm::style::Color::Green,
            Color::Yellow => termimad::crossterm::style::Color::Yellow,
            Color::Blue => termimad::crossterm::style::Color::Blue,
            Color::AnsiValue(v) => termimad::crossterm::style::Color::AnsiValue(v),
            Color::Rgb { r, g, b } => termimad::crossterm::style::Color::Rgb { r, g, b },
            _ => termimad::crossterm::style::Color::Cyan,
        }
    }
}
