//! 採点結果の型定義
//!
//! Web(WASM)アプリと共有される型:
//! - EvaluationResult: AIが返す採点結果（スキーマ制約付き）
//! - HistoryEntry: localStorageに永続化される履歴1件
//! - EvaluationPreset: プロンプトの重点を切り替える3種のプリセット
//!
//! JSONキーは上流サービスのスキーマと永続化フォーマットに合わせて
//! camelCaseで固定する。

use serde::{Deserialize, Serialize};

/// 1観点の採点（1〜10点 + 根拠）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreMetric {
    pub score: f64,
    pub justification: String,
}

/// 筆跡の複合採点
///
/// overall_scoreはAIが独立に付けるもので、
/// legibility/neatnessからの算出値ではない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandwritingAnalysis {
    pub overall_score: f64,
    pub legibility: ScoreMetric,
    pub neatness: ScoreMetric,
    pub justification: String,
}

/// 4観点の採点一式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub creativity: ScoreMetric,
    pub handwriting: HandwritingAnalysis,
    pub relevance: ScoreMetric,
    pub presentation: ScoreMetric,
}

/// AI採点結果（1回の評価につき1件、作成後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// 総合点（0〜100）
    pub overall_score: f64,
    /// 総評パラグラフ
    pub overall_feedback: String,
    pub scores: DimensionScores,
    /// 誤り・弱点の箇条書き
    pub mistakes: Vec<String>,
    /// 改善提案の箇条書き
    pub recommendations: Vec<String>,
}

/// 採点履歴1件
///
/// idは作成時刻（エポックms）で単調増加。overall_scoreは
/// result.overall_scoreの非正規化コピー（永続化フォーマット互換のため保持）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    /// 表示用日時文字列
    pub date: String,
    pub file_name: String,
    pub rubric: String,
    pub overall_score: f64,
    pub result: EvaluationResult,
}

impl HistoryEntry {
    /// 採点成功時に履歴1件を生成する
    ///
    /// overall_scoreは必ずresultからコピーされる。
    pub fn new(
        id: i64,
        date: String,
        file_name: String,
        rubric: String,
        result: EvaluationResult,
    ) -> Self {
        Self {
            id,
            date,
            file_name,
            rubric,
            overall_score: result.overall_score,
            result,
        }
    }
}

/// 評価プリセット（プロンプトの重点を切り替える固定3種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvaluationPreset {
    /// 内容の正確さとルーブリック適合に厳格
    #[default]
    #[serde(rename = "content-accuracy-strict")]
    ContentAccuracy,
    /// 文章の質・文法に厳格
    #[serde(rename = "writing-quality-strict")]
    WritingQuality,
    /// バランス重視の素早い概評
    #[serde(rename = "balanced-fast")]
    Balanced,
}

impl EvaluationPreset {
    pub const ALL: [EvaluationPreset; 3] = [
        EvaluationPreset::ContentAccuracy,
        EvaluationPreset::WritingQuality,
        EvaluationPreset::Balanced,
    ];

    /// select要素のvalue等に使う識別子
    pub fn id(&self) -> &'static str {
        match self {
            EvaluationPreset::ContentAccuracy => "content-accuracy-strict",
            EvaluationPreset::WritingQuality => "writing-quality-strict",
            EvaluationPreset::Balanced => "balanced-fast",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationPreset::ContentAccuracy => "内容重視（厳格）",
            EvaluationPreset::WritingQuality => "文章重視（厳格）",
            EvaluationPreset::Balanced => "バランス（高速）",
        }
    }

    /// 識別子からの逆引き
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.id() == id)
    }
}

/// スコアの色帯
///
/// 総合点バナーと履歴リストで同一の帯分けを使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Favorable,
    Caution,
    Unfavorable,
}

impl ScoreBand {
    /// 総合点（0〜100）の帯分け: 80以上 / 50以上 / それ未満
    pub fn for_overall(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Favorable
        } else if score >= 50.0 {
            ScoreBand::Caution
        } else {
            ScoreBand::Unfavorable
        }
    }

    /// 観点スコア（1〜10）の帯分け: 8以上 / 5以上 / それ未満
    pub fn for_metric(score: f64) -> Self {
        if score >= 8.0 {
            ScoreBand::Favorable
        } else if score >= 5.0 {
            ScoreBand::Caution
        } else {
            ScoreBand::Unfavorable
        }
    }

    /// CSSクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Favorable => "band-favorable",
            ScoreBand::Caution => "band-caution",
            ScoreBand::Unfavorable => "band-unfavorable",
        }
    }
}
