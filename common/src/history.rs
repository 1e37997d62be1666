//! 採点履歴ログ
//!
//! 永続化される履歴配列の純粋ロジック。表示は常にid降順
//! （新しい順）で行い、物理的な格納順には依存しない。

use serde::{Deserialize, Serialize};

use crate::types::HistoryEntry;

/// 採点履歴（履歴配列を単独所有する）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// 新規エントリを先頭に追加する
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// 全履歴を破棄する
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 格納順のまま参照する（永続化用）
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// 表示用: id降順（新しい順）に並べたコピーを返す
    pub fn sorted_desc(&self) -> Vec<HistoryEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.id.cmp(&a.id));
        sorted
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::sample_result;
    use crate::types::HistoryEntry;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry::new(
            id,
            format!("date-{}", id),
            format!("sheet{}.png", id),
            "rubric".to_string(),
            sample_result(60.0),
        )
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut log = HistoryLog::new();
        log.prepend(entry(1));
        log.prepend(entry(2));
        log.prepend(entry(3));
        let ids: Vec<i64> = log.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sorted_desc_ignores_insertion_order() {
        // 格納順が乱れていても表示順はid降順
        let log = HistoryLog::from_entries(vec![entry(2), entry(5), entry(1), entry(4)]);
        let ids: Vec<i64> = log.sorted_desc().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 2, 1]);
    }

    #[test]
    fn test_sorted_desc_adjacent_pairs_monotonic() {
        let log = HistoryLog::from_entries(vec![entry(3), entry(9), entry(7), entry(1)]);
        let sorted = log.sorted_desc();
        for pair in sorted.windows(2) {
            assert!(pair[0].id >= pair[1].id);
        }
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = HistoryLog::from_entries(vec![entry(1), entry(2), entry(3), entry(4), entry(5)]);
        assert_eq!(log.len(), 5);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.sorted_desc().len(), 0);
    }

    #[test]
    fn test_contains() {
        let log = HistoryLog::from_entries(vec![entry(10)]);
        assert!(log.contains(10));
        assert!(!log.contains(11));
    }

    #[test]
    fn test_serde_transparent_roundtrip() {
        // localStorageの既存フォーマット（素の配列）と互換であること
        let log = HistoryLog::from_entries(vec![entry(2), entry(1)]);
        let json = serde_json::to_string(&log).expect("シリアライズ失敗");
        assert!(json.starts_with('['));
        let back: HistoryLog = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(back, log);
    }

    #[test]
    fn test_select_roundtrip_preserves_result() {
        // 履歴から選択したエントリのresultは作成時と同一
        let original = sample_result(88.0);
        let mut log = HistoryLog::new();
        log.prepend(HistoryEntry::new(
            7,
            "date".to_string(),
            "sheet.png".to_string(),
            "rubric".to_string(),
            original.clone(),
        ));
        let selected = log.sorted_desc().into_iter().find(|e| e.id == 7).unwrap();
        assert_eq!(selected.result, original);
        assert_eq!(selected.overall_score, original.overall_score);
    }
}
