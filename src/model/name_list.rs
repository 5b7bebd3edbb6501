//! Name list state - the draft text and the append-only entry list
//!
//! State only changes through `change_text` and `submit`. Entries are never
//! removed, edited or reordered once appended.

use super::entry::{Entry, EntryId, IdGenerator};
use chrono::Local;
use tracing::debug;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new entry was appended
    Added(EntryId),
    /// The draft was empty after trimming; nothing changed
    Rejected,
}

/// Strip surrounding whitespace. A stray byte-order mark counts as whitespace.
fn trim_name(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[derive(Debug, Default)]
pub struct NameList {
    draft: String,
    entries: Vec<Entry>,
    ids: IdGenerator,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Replace the draft text. No validation happens here.
    pub fn change_text(&mut self, new_text: impl Into<String>) {
        self.draft = new_text.into();
    }

    /// Turn the draft into a new entry.
    ///
    /// A whitespace-only draft is rejected silently and left as it is.
    pub fn submit(&mut self) -> SubmitOutcome {
        let trimmed = trim_name(&self.draft);
        if trimmed.is_empty() {
            return SubmitOutcome::Rejected;
        }

        let entry = Entry {
            id: self.ids.next_id(),
            value: trimmed.to_string(),
            created_at: Local::now(),
        };
        let id = entry.id;
        self.entries.push(entry);
        self.draft.clear();

        debug!(%id, count = self.entries.len(), "entry added");
        SubmitOutcome::Added(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &NameList) -> Vec<&str> {
        list.entries().iter().map(|e| e.value.as_str()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = NameList::new();
        assert!(list.is_empty());
        assert_eq!(list.draft(), "");
    }

    #[test]
    fn test_change_text_stores_raw_text() {
        let mut list = NameList::new();
        list.change_text("  raw  text ");
        assert_eq!(list.draft(), "  raw  text ");
        assert!(list.is_empty());
    }

    #[test]
    fn test_whitespace_only_submit_is_rejected() {
        for draft in ["", " ", "   ", "\t", " \n \t ", "\u{FEFF}", " \u{FEFF}\u{00A0} "] {
            let mut list = NameList::new();
            list.change_text(draft);
            assert_eq!(list.submit(), SubmitOutcome::Rejected);
            assert!(list.is_empty());
            assert_eq!(list.draft(), draft);
        }
    }

    #[test]
    fn test_submit_appends_trimmed_value_and_clears_draft() {
        let mut list = NameList::new();
        list.change_text("Alice");
        let outcome = list.submit();

        assert!(matches!(outcome, SubmitOutcome::Added(_)));
        assert_eq!(values(&list), vec!["Alice"]);
        assert_eq!(list.draft(), "");
    }

    #[test]
    fn test_outcome_carries_new_entry_id() {
        let mut list = NameList::new();
        list.change_text("Dana");
        let SubmitOutcome::Added(id) = list.submit() else {
            panic!("expected an added entry");
        };
        assert_eq!(list.entries()[0].id, id);
        assert_eq!(list.position_of(id), Some(0));
    }

    #[test]
    fn test_padded_and_plain_values_store_the_same() {
        let mut padded = NameList::new();
        padded.change_text("  Alice  ");
        padded.submit();

        let mut plain = NameList::new();
        plain.change_text("Alice");
        plain.submit();

        assert_eq!(padded.entries()[0].value, plain.entries()[0].value);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed_from_value() {
        let mut list = NameList::new();
        list.change_text("\u{FEFF}Zoé ");
        list.submit();
        assert_eq!(values(&list), vec!["Zoé"]);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let mut list = NameList::new();
        list.change_text("  Mary  Ann ");
        list.submit();
        assert_eq!(values(&list), vec!["Mary  Ann"]);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut list = NameList::new();
        let names = ["Zoe", "adam", "Mike", "Bea", "Adam"];
        for name in names {
            list.change_text(name);
            list.submit();
        }
        assert_eq!(values(&list), names.to_vec());
    }

    #[test]
    fn test_alice_empty_bob_scenario() {
        let mut list = NameList::new();

        list.change_text("Alice");
        list.submit();
        assert_eq!(values(&list), vec!["Alice"]);

        list.change_text("");
        assert_eq!(list.submit(), SubmitOutcome::Rejected);
        assert_eq!(values(&list), vec!["Alice"]);

        list.change_text("  Bob ");
        list.submit();
        assert_eq!(values(&list), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_rapid_duplicate_submissions_get_distinct_ids() {
        let mut list = NameList::new();
        list.change_text("Carol");
        list.submit();
        list.change_text("Carol");
        list.submit();

        assert_eq!(values(&list), vec!["Carol", "Carol"]);
        assert_ne!(list.entries()[0].id, list.entries()[1].id);
    }

    #[test]
    fn test_second_submit_without_new_text_is_rejected() {
        let mut list = NameList::new();
        list.change_text("Eve");
        list.submit();
        assert_eq!(list.submit(), SubmitOutcome::Rejected);
        assert_eq!(list.len(), 1);
    }
}
