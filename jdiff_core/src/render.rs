use jdiff_common::{DiffEntry, DiffResult};
use serde::Serialize;

/// The two output projections of a diff result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDiff {
    /// Two-column HTML display form
    pub display_markup: String,
    /// Unified +/- text form
    pub unified_text: String,
}

/// Projects a diff result into its display and unified text forms.
///
/// Both projections are pure functions of the result and never mutate it. A
/// result violating the merge adjacency invariant would be an internal bug
/// upstream, not something the renderer recovers from; it renders whatever
/// entries it is given.
pub struct DiffRenderer;

impl DiffRenderer {
    pub fn render(diff: &DiffResult) -> RenderedDiff {
        RenderedDiff {
            display_markup: Self::render_display(diff),
            unified_text: Self::render_unified(diff),
        }
    }

    /// Two-column display form: one row per entry, left and right cells.
    ///
    /// `Added` leaves the left cell empty, `Removed` the right; `Changed`
    /// shows both texts. An empty result renders the header row only.
    pub fn render_display(diff: &DiffResult) -> String {
        let mut output = String::new();
        output.push_str("<table class=\"diff\">\n");
        output.push_str("  <tr><th>Left</th><th>Right</th></tr>\n");

        for entry in &diff.entries {
            let row = match entry {
                DiffEntry::Same { text } => {
                    let cell = escape_html(text);
                    format!("  <tr class=\"same\"><td>{cell}</td><td>{cell}</td></tr>\n")
                }
                DiffEntry::Added { text } => format!(
                    "  <tr class=\"added\"><td></td><td>{}</td></tr>\n",
                    escape_html(text)
                ),
                DiffEntry::Removed { text } => format!(
                    "  <tr class=\"removed\"><td>{}</td><td></td></tr>\n",
                    escape_html(text)
                ),
                DiffEntry::Changed { left, right } => format!(
                    "  <tr class=\"changed\"><td>{}</td><td>{}</td></tr>\n",
                    escape_html(left),
                    escape_html(right)
                ),
            };
            output.push_str(&row);
        }

        output.push_str("</table>\n");
        output
    }

    /// Unified text form: `"  "` same, `"+ "` added, `"- "` removed;
    /// a changed entry expands to its removed line then its added line.
    pub fn render_unified(diff: &DiffResult) -> String {
        let mut lines = Vec::with_capacity(diff.len());
        for entry in &diff.entries {
            match entry {
                DiffEntry::Same { text } => lines.push(format!("  {text}")),
                DiffEntry::Added { text } => lines.push(format!("+ {text}")),
                DiffEntry::Removed { text } => lines.push(format!("- {text}")),
                DiffEntry::Changed { left, right } => {
                    lines.push(format!("- {left}"));
                    lines.push(format!("+ {right}"));
                }
            }
        }
        lines.join("\n")
    }
}

/// Escape text for safe embedding in markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
