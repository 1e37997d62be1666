//! 採点レポートコンポーネント
//!
//! EvaluationResultの純粋な写像。総合点バナー、4観点の比較チャート、
//! 観点別スコアカード、誤り・改善提案リストを描画する。状態は持たない。

use grader_ai_common::{EvaluationResult, HandwritingAnalysis, ScoreBand, ScoreMetric};
use leptos::prelude::*;

#[component]
pub fn EvaluationReport(result: EvaluationResult) -> impl IntoView {
    let overall_band = ScoreBand::for_overall(result.overall_score);

    // 比較チャートの4値（筆跡は複合スコアのoverallを使う）
    let chart_data = [
        ("独創性", result.scores.creativity.score),
        ("筆跡", result.scores.handwriting.overall_score),
        ("関連性", result.scores.relevance.score),
        ("構成", result.scores.presentation.score),
    ];

    view! {
        <div class="evaluation-report">
            <div class="report-section">
                <h3>"総合点"</h3>
                <div class=format!("overall-banner {}", overall_band.css_class())>
                    <span class="overall-score">{format!("{:.0}", result.overall_score)}</span>
                    <span class="overall-denominator">"/ 100"</span>
                </div>
                <p class="overall-feedback">{result.overall_feedback.clone()}</p>
            </div>

            <div class="report-section">
                <h3>"観点別スコア"</h3>
                <div class="score-chart">
                    {chart_data
                        .into_iter()
                        .map(|(label, score)| {
                            view! {
                                <div class="chart-column">
                                    <div class="chart-track">
                                        <div
                                            class="chart-bar"
                                            style=format!("height: {}%", score * 10.0)
                                        ></div>
                                    </div>
                                    <span class="chart-value">{format!("{:.0}", score)}</span>
                                    <span class="chart-label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="score-cards">
                    <ScoreCard title="独創性" metric=result.scores.creativity.clone() />
                    <HandwritingCard analysis=result.scores.handwriting.clone() />
                    <ScoreCard title="関連性" metric=result.scores.relevance.clone() />
                    <ScoreCard title="構成" metric=result.scores.presentation.clone() />
                </div>
            </div>

            <div class="report-section">
                <h3>"誤り・弱点"</h3>
                <ul class="mistake-list">
                    {result
                        .mistakes
                        .iter()
                        .map(|m| view! { <li>{m.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="report-section">
                <h3>"改善提案"</h3>
                <ul class="recommendation-list">
                    {result
                        .recommendations
                        .iter()
                        .map(|r| view! { <li>{r.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 単観点のスコアカード
#[component]
fn ScoreCard(title: &'static str, metric: ScoreMetric) -> impl IntoView {
    let band = ScoreBand::for_metric(metric.score);

    view! {
        <div class="score-card">
            <h4>{title}</h4>
            <p class=format!("card-score {}", band.css_class())>
                {format!("{:.0}/10", metric.score)}
            </p>
            <p class="card-justification">{metric.justification.clone()}</p>
        </div>
    }
}

/// 筆跡の複合スコアカード（legibility/neatnessのサブスコア付き）
#[component]
fn HandwritingCard(analysis: HandwritingAnalysis) -> impl IntoView {
    let band = ScoreBand::for_metric(analysis.overall_score);

    view! {
        <div class="score-card handwriting-card">
            <div class="card-header">
                <h4>"筆跡"</h4>
                <p class=format!("card-score {}", band.css_class())>
                    {format!("{:.0}/10", analysis.overall_score)}
                </p>
            </div>
            <p class="card-justification">{analysis.justification.clone()}</p>

            <div class="sub-scores">
                <div class="sub-score">
                    <p>
                        "読みやすさ: "
                        <strong>{format!("{:.0}/10", analysis.legibility.score)}</strong>
                    </p>
                    <p class="text-muted">{analysis.legibility.justification.clone()}</p>
                </div>
                <div class="sub-score">
                    <p>
                        "丁寧さ: "
                        <strong>{format!("{:.0}/10", analysis.neatness.score)}</strong>
                    </p>
                    <p class="text-muted">{analysis.neatness.justification.clone()}</p>
                </div>
            </div>
        </div>
    }
}
