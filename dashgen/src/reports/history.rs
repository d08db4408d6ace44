//! History command reports.

use crate::history::{HISTORY_LIMIT, SavedState};

use super::output::{Output, Report};

/// Saved interfaces and recent inputs.
#[derive(Debug)]
pub struct HistoryReport<'a> {
    pub state: &'a SavedState,
}

impl Report for HistoryReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        let state = self.state;
        if state.saved.is_empty() {
            out.preformatted("No saved interfaces");
        } else {
            out.section(&format!("Saved ({})", state.saved.len()));
            for (name, interface) in &state.saved {
                out.list_item(&format!("{} ({})", name, interface.resource()));
            }
        }
        out.newline();

        if state.history.is_empty() {
            out.preformatted("No history");
            return;
        }
        out.section(&format!(
            "History ({} of at most {})",
            state.history.len(),
            HISTORY_LIMIT
        ));
        for (index, input) in state.history.iter().enumerate() {
            out.preformatted(&format!("  {}. {}", index + 1, summarize(input)));
        }
    }
}

/// First line of an input, shortened to fit a terminal line.
fn summarize(input: &str) -> String {
    const WIDTH: usize = 60;
    let compact: String = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= WIDTH {
        compact
    } else {
        let head: String = compact.chars().take(WIDTH - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use dashgen_manifest::{Interface, NamingConvention, Schema};

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_summarize_compacts_and_truncates() {
        assert_eq!(summarize("{\n  \"schema\": {}\n}"), "{ \"schema\": {} }");
        let long = format!("\"{}\"", "a".repeat(100));
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), 60);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_render_lists_saved_and_history() {
        let mut state = SavedState::default();
        state.saved.insert(
            "shelf".into(),
            Interface::new(Schema::new(), NamingConvention::from_singular("book", None)),
        );
        state.history.push("{}".into());

        let mut out = BufferOutput::default();
        HistoryReport { state: &state }.render(&mut out);

        assert!(out.stdout.contains("Saved (1):\n  - shelf (books)\n"));
        assert!(out.stdout.contains("  1. {}\n"));
    }
}
