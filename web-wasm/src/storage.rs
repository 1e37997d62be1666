//! 採点履歴のlocalStorage永続化
//!
//! 永続化はベストエフォート。読込不能な内容は黙って破棄して空で開始し、
//! 書込失敗は記録するだけで採点フローを止めない。

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use grader_ai_common::HistoryLog;

/// 履歴を保持する単一のlocalStorageキー
pub const HISTORY_KEY: &str = "evaluationHistory";

/// 起動時の履歴読込
///
/// キーがない・中身が壊れている場合は空の履歴を返す。
/// 壊れたキーはその場で削除する。呼び出し側にエラーは伝播しない。
pub fn load_history() -> HistoryLog {
    match LocalStorage::get::<HistoryLog>(HISTORY_KEY) {
        Ok(log) => log,
        Err(StorageError::KeyNotFound(_)) => HistoryLog::new(),
        Err(e) => {
            gloo::console::warn!(format!("履歴の読込に失敗したため破棄します: {}", e));
            LocalStorage::delete(HISTORY_KEY);
            HistoryLog::new()
        }
    }
}

/// 履歴の保存（fire-and-forget）
///
/// 容量超過などで失敗しても採点結果の表示は妨げない。
pub fn save_history(log: &HistoryLog) {
    if let Err(e) = LocalStorage::set(HISTORY_KEY, log) {
        gloo::console::warn!(format!("履歴の保存に失敗しました: {}", e));
    }
}

/// 履歴の全消去（永続キーごと削除）
pub fn clear_history() {
    LocalStorage::delete(HISTORY_KEY);
}
