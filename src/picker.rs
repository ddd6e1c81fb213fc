//! Fuzzy list picker over encoded lines.
//!
//! The picker never interprets what it shows: it gets opaque lines, a
//! display configuration (field delimiter, visible columns, prompt) and a
//! map of keys to actions, and hands the selected line back verbatim. The
//! boundary is a serialization boundary; see `codec`.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// What a bound key asks the session to do with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Accept,
    Delete,
    ToggleForce,
    Create,
    Cancel,
}

pub type Bindings = HashMap<(KeyCode, KeyModifiers), PickerAction>;

/// Accept and cancel are always bound; everything else is opt-in per
/// picker.
pub fn default_bindings() -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert((KeyCode::Enter, KeyModifiers::NONE), PickerAction::Accept);
    bindings.insert((KeyCode::Esc, KeyModifiers::NONE), PickerAction::Cancel);
    bindings.insert(
        (KeyCode::Char('c'), KeyModifiers::CONTROL),
        PickerAction::Cancel,
    );
    bindings
}

pub struct PickerConfig {
    pub prompt: String,
    pub delimiter: char,
    /// Which delimiter-separated fields of a line are shown, in order.
    pub visible_columns: Vec<usize>,
    pub bindings: Bindings,
}

impl PickerConfig {
    pub fn new(prompt: &str, delimiter: char, visible_columns: Vec<usize>) -> Self {
        Self {
            prompt: prompt.to_string(),
            delimiter,
            visible_columns,
            bindings: default_bindings(),
        }
    }

    /// Merges caller bindings over the defaults.
    pub fn bind(mut self, key: KeyCode, modifiers: KeyModifiers, action: PickerAction) -> Self {
        self.bindings.insert((key, modifiers), action);
        self
    }
}

pub struct Picker {
    config: PickerConfig,
    lines: Vec<String>,
    matcher: SkimMatcherV2,
    query: String,
    cursor: usize,
    /// Indices into `lines`, best match first.
    matches: Vec<usize>,
}

impl Picker {
    pub fn new(config: PickerConfig, lines: Vec<String>) -> Self {
        let mut picker = Self {
            config,
            lines,
            matcher: SkimMatcherV2::default(),
            query: String::new(),
            cursor: 0,
            matches: Vec::new(),
        };
        picker.refresh_matches();
        picker
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<PickerAction> {
        self.config.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// The line under the cursor, exactly as it was handed in.
    pub fn selected_line(&self) -> Option<&str> {
        self.matches
            .get(self.cursor)
            .map(|&idx| self.lines[idx].as_str())
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        // Ranking changed, so the old cursor position is meaningless.
        self.cursor = 0;
        self.refresh_matches();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.cursor = 0;
        self.refresh_matches();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.refresh_matches();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.matches.len() {
            self.cursor += 1;
        }
    }

    /// Projects a line through the visible-column configuration.
    pub fn display_row(&self, line: &str) -> String {
        let fields: Vec<&str> = line.split(self.config.delimiter).collect();
        let cells: Vec<&str> = self
            .config
            .visible_columns
            .iter()
            .filter_map(|&idx| fields.get(idx).copied())
            .collect();
        cells.join("  ")
    }

    /// Display rows in match order, with the cursor flag.
    pub fn visible_rows(&self) -> Vec<(String, bool)> {
        self.matches
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (self.display_row(&self.lines[idx]), pos == self.cursor))
            .collect()
    }

    fn refresh_matches(&mut self) {
        if self.query.is_empty() {
            self.matches = (0..self.lines.len()).collect();
        } else {
            let mut scored: Vec<(i64, usize)> = self
                .lines
                .iter()
                .enumerate()
                .filter_map(|(idx, line)| {
                    self.matcher
                        .fuzzy_match(&self.display_row(line), &self.query)
                        .map(|score| (score, idx))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
            self.matches = scored.into_iter().map(|(_, idx)| idx).collect();
        }
        if self.matches.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.matches.len() {
            self.cursor = self.matches.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worktree_lines() -> Vec<String> {
        vec![
            "master\t/repo/main\tabc123".to_string(),
            "feature-x\t/repo/feat\tdef456".to_string(),
            "bugfix\t/repo/fix\t789abc".to_string(),
        ]
    }

    fn picker() -> Picker {
        Picker::new(
            PickerConfig::new("worktrees", '\t', vec![0, 1]),
            worktree_lines(),
        )
    }

    #[test]
    fn test_empty_query_keeps_input_order() {
        let picker = picker();
        assert_eq!(picker.match_count(), 3);
        assert_eq!(picker.selected_line(), Some("master\t/repo/main\tabc123"));
    }

    #[test]
    fn test_fuzzy_filter_narrows_matches() {
        let mut picker = picker();
        for c in "feat".chars() {
            picker.push_query_char(c);
        }
        assert_eq!(picker.match_count(), 1);
        assert_eq!(
            picker.selected_line(),
            Some("feature-x\t/repo/feat\tdef456")
        );
    }

    #[test]
    fn test_no_match_yields_no_selection() {
        let mut picker = picker();
        for c in "zzzz".chars() {
            picker.push_query_char(c);
        }
        assert_eq!(picker.match_count(), 0);
        assert_eq!(picker.selected_line(), None);
    }

    #[test]
    fn test_cursor_clamps_when_matches_shrink() {
        let mut picker = picker();
        picker.move_down();
        picker.move_down();
        assert_eq!(picker.selected_line(), Some("bugfix\t/repo/fix\t789abc"));

        for c in "feat".chars() {
            picker.push_query_char(c);
        }
        assert_eq!(
            picker.selected_line(),
            Some("feature-x\t/repo/feat\tdef456")
        );
    }

    #[test]
    fn test_query_edit_selects_the_best_match() {
        let mut picker = picker();
        picker.move_down();
        picker.move_down();
        assert_eq!(picker.selected_line(), Some("bugfix\t/repo/fix\t789abc"));

        // "f" matches both feature-x and bugfix; the selection must land
        // on the top-ranked row, not wherever the cursor was before.
        picker.push_query_char('f');
        assert_eq!(picker.match_count(), 2);
        assert_eq!(
            picker.selected_line(),
            Some("feature-x\t/repo/feat\tdef456")
        );
    }

    #[test]
    fn test_query_is_recoverable_for_fallback() {
        let mut picker = picker();
        for c in "brand-new".chars() {
            picker.push_query_char(c);
        }
        assert_eq!(picker.query(), "brand-new");
        picker.pop_query_char();
        assert_eq!(picker.query(), "brand-ne");
        picker.clear_query();
        assert_eq!(picker.query(), "");
        assert_eq!(picker.match_count(), 3);
    }

    #[test]
    fn test_display_row_projects_visible_columns() {
        let picker = picker();
        assert_eq!(
            picker.display_row("master\t/repo/main\tabc123"),
            "master  /repo/main"
        );
    }

    #[test]
    fn test_display_row_tolerates_missing_columns() {
        let picker = Picker::new(
            PickerConfig::new("worktrees", '\t', vec![0, 1, 5]),
            Vec::new(),
        );
        assert_eq!(picker.display_row("a\tb"), "a  b");
    }

    #[test]
    fn test_default_bindings_and_overrides() {
        let config = PickerConfig::new("worktrees", '\t', vec![0]).bind(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL,
            PickerAction::Delete,
        );
        let picker = Picker::new(config, worktree_lines());

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(picker.action_for(&enter), Some(PickerAction::Accept));

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(picker.action_for(&ctrl_d), Some(PickerAction::Delete));

        let unbound = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(picker.action_for(&unbound), None);
    }

    #[test]
    fn test_bind_can_replace_a_default() {
        let config = PickerConfig::new("worktrees", '\t', vec![0]).bind(
            KeyCode::Esc,
            KeyModifiers::NONE,
            PickerAction::Accept,
        );
        let picker = Picker::new(config, worktree_lines());
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(picker.action_for(&esc), Some(PickerAction::Accept));
    }
}
