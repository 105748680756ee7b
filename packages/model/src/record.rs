//! # Spending records and the writer-form draft
//!
//! [`Record`] is a saved entry as the server returns it. [`RecordDraft`] is
//! the working copy behind the writer form; it is only checked at submit
//! time via [`RecordDraft::validate`], nothing is enforced while typing.
//! [`rows`] shapes a fetched page into what the visited-date list renders,
//! including the trailing load-more affordance.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Spending categories offered by the writer form, default first.
pub const CATEGORIES: [&str; 6] = ["식비", "카페", "문화생활", "교통", "선물", "기타"];

/// One saved spending record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub place_name: String,
    pub visited_at: NaiveDateTime,
    pub menus: Vec<String>,
    pub amount: i64,
    pub category: String,
    /// 0 means not rated, otherwise 1..=5.
    pub score: u8,
    /// `false` is a personal expense, `true` a shared date expense.
    pub is_dutch: bool,
}

/// What stops a draft from being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    EmptyPlaceName,
    NonPositiveAmount,
}

impl fmt::Display for DraftIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftIssue::EmptyPlaceName => write!(f, "장소를 입력해주세요."),
            DraftIssue::NonPositiveAmount => write!(f, "금액을 입력해주세요."),
        }
    }
}

/// Working copy of the writer form.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub is_dutch: bool,
    pub amount: i64,
    pub category: String,
    pub place_name: String,
    pub visited_at: NaiveDateTime,
    pub score: u8,
    /// Raw detail field text; split on commas at submit.
    pub menu_text: String,
}

impl RecordDraft {
    /// Fresh draft for a new record. `now` is injected so this stays usable
    /// on every target.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            is_dutch: false,
            amount: 0,
            category: CATEGORIES[0].to_string(),
            place_name: String::new(),
            visited_at: now,
            score: 0,
            menu_text: String::new(),
        }
    }

    /// Draft pre-filled from an existing record, for editing.
    pub fn from_record(record: &Record) -> Self {
        Self {
            is_dutch: record.is_dutch,
            amount: record.amount,
            category: record.category.clone(),
            place_name: record.place_name.clone(),
            visited_at: record.visited_at,
            score: record.score,
            menu_text: record.menus.join(", "),
        }
    }

    /// Picking the current score clears it back to unrated; anything else
    /// replaces it.
    pub fn pick_score(&mut self, picked: u8) {
        self.score = if self.score == picked { 0 } else { picked };
    }

    /// Detail text split into menu entries, empties dropped.
    pub fn menus(&self) -> Vec<String> {
        self.menu_text
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Submit-time check. A score of 0 (unrated) is legal.
    pub fn validate(&self) -> Result<(), DraftIssue> {
        if self.place_name.trim().is_empty() {
            return Err(DraftIssue::EmptyPlaceName);
        }
        if self.amount <= 0 {
            return Err(DraftIssue::NonPositiveAmount);
        }
        Ok(())
    }
}

/// A row of the visited-date list.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordRow {
    Entry(Record),
    /// The fetch-next-page affordance; present at most once and only last.
    LoadMore,
}

/// Orders records newest visit first (ties broken by id so the order is
/// stable) and appends the load-more row when the server reports more.
pub fn rows(mut records: Vec<Record>, has_more: bool) -> Vec<RecordRow> {
    records.sort_by(|a, b| {
        b.visited_at
            .cmp(&a.visited_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    let mut rows: Vec<RecordRow> = records.into_iter().map(RecordRow::Entry).collect();
    if has_more {
        rows.push(RecordRow::LoadMore);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(id: &str, d: u32) -> Record {
        Record {
            id: id.to_string(),
            place_name: "성수동 카페".to_string(),
            visited_at: day(d),
            menus: vec!["아메리카노".to_string()],
            amount: 9000,
            category: "카페".to_string(),
            score: 4,
            is_dutch: true,
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = RecordDraft::new(day(10));
        assert!(!draft.is_dutch);
        assert_eq!(draft.amount, 0);
        assert_eq!(draft.category, "식비");
        assert_eq!(draft.place_name, "");
        assert_eq!(draft.visited_at, day(10));
        assert_eq!(draft.score, 0);
        assert_eq!(draft.menus(), Vec::<String>::new());
    }

    #[test]
    fn test_draft_roundtrip_from_record() {
        let original = record("a", 3);
        let draft = RecordDraft::from_record(&original);
        assert_eq!(draft.place_name, original.place_name);
        assert_eq!(draft.amount, original.amount);
        assert_eq!(draft.menus(), original.menus);
    }

    #[test]
    fn test_pick_score_toggles_back_to_unrated() {
        let mut draft = RecordDraft::new(day(1));
        draft.pick_score(3);
        assert_eq!(draft.score, 3);
        draft.pick_score(5);
        assert_eq!(draft.score, 5);
        draft.pick_score(5);
        assert_eq!(draft.score, 0);
    }

    #[test]
    fn test_menus_split_and_trim() {
        let mut draft = RecordDraft::new(day(1));
        draft.menu_text = "파스타, 피자 ,, 티라미수 ".to_string();
        assert_eq!(draft.menus(), vec!["파스타", "피자", "티라미수"]);
    }

    #[test]
    fn test_validate() {
        let mut draft = RecordDraft::new(day(1));
        assert_eq!(draft.validate(), Err(DraftIssue::EmptyPlaceName));

        draft.place_name = "릴리라운지".to_string();
        assert_eq!(draft.validate(), Err(DraftIssue::NonPositiveAmount));

        draft.amount = 15000;
        assert_eq!(draft.validate(), Ok(()));

        // Unrated is fine
        draft.score = 0;
        assert_eq!(draft.validate(), Ok(()));

        draft.place_name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftIssue::EmptyPlaceName));
    }

    #[test]
    fn test_rows_sorted_newest_first() {
        let listed = rows(vec![record("a", 1), record("b", 9), record("c", 5)], false);
        let ids: Vec<&str> = listed
            .iter()
            .map(|row| match row {
                RecordRow::Entry(r) => r.id.as_str(),
                RecordRow::LoadMore => "more",
            })
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rows_load_more_only_when_more_exists() {
        let listed = rows(vec![record("a", 1)], true);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.last(), Some(&RecordRow::LoadMore));
        assert_eq!(
            listed
                .iter()
                .filter(|row| matches!(row, RecordRow::LoadMore))
                .count(),
            1
        );

        let listed = rows(vec![record("a", 1)], false);
        assert!(!listed.iter().any(|row| matches!(row, RecordRow::LoadMore)));

        // Empty page with more still shows the affordance
        let listed = rows(Vec::new(), true);
        assert_eq!(listed, vec![RecordRow::LoadMore]);
    }

    #[test]
    fn test_rows_tie_on_visited_date_is_stable() {
        let listed = rows(vec![record("a", 5), record("b", 5)], false);
        let first = match &listed[0] {
            RecordRow::Entry(r) => r.id.clone(),
            RecordRow::LoadMore => unreachable!(),
        };
        assert_eq!(first, "b");
    }
}
