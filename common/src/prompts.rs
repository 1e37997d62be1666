//! プロンプト生成モジュール
//!
//! 答案画像の採点指示プロンプトを組み立てる。ルーブリックは原文のまま
//! 埋め込み、出力は宣言スキーマに一致する単一JSONオブジェクトに固定する。
//! プロンプト本文は上流モデルへの指示のため英語。

use crate::types::EvaluationPreset;

/// プリセットごとの重点指示
pub fn preset_focus(preset: EvaluationPreset) -> &'static str {
    match preset {
        EvaluationPreset::ContentAccuracy => {
            "Focus on contextual understanding and content accuracy. \
             Be strict with relevance to the provided rubric."
        }
        EvaluationPreset::WritingQuality => {
            "Focus on nuanced language, grammatical structure, and the quality of writing. \
             Be more critical of sentence construction."
        }
        EvaluationPreset::Balanced => {
            "Provide a balanced and efficient overview. Focus on key points and clarity, \
             giving a faster, more general assessment."
        }
    }
}

/// 採点プロンプト生成
///
/// # Arguments
/// * `rubric` - ルーブリック／模範解答（原文のまま埋め込む）
/// * `preset` - 評価プリセット
pub fn build_evaluation_prompt(rubric: &str, preset: EvaluationPreset) -> String {
    let focus = preset_focus(preset);

    format!(
        r#"You are an expert teacher's assistant AI. Your task is to evaluate a student's answer sheet based on a provided rubric.
Analyze the attached image of the answer sheet and the rubric below.

**Rubric / Correct Answer:**
---
{rubric}
---

**Evaluation Instructions:**
1.  **Read the Answer:** Carefully analyze the student's handwritten answer in the image.
2.  **Compare with Rubric:** Evaluate the student's answer against the provided rubric for accuracy and completeness.
3.  **Score Multiple Criteria:** Provide a score from 1 (poor) to 10 (excellent) for each of the following criteria, along with a brief justification for each score:
    *   **Creativity:** How original or insightful is the answer?
    *   **Handwriting:** Provide a detailed analysis. This must include separate scores (1-10) and justifications for **Legibility** (how easy it is to read individual characters) and **Neatness** (how organized and tidy the writing appears). Then, provide an overall handwriting score (1-10) and a summary justification based on legibility and neatness.
    *   **Relevance:** How well does the answer address the question and stick to the rubric?
    *   **Presentation:** How well is the answer structured and organized? (e.g., use of paragraphs, headings).
4.  **Identify Mistakes:** List the key mistakes, inaccuracies, or gaps in the student's answer in a clear, bulleted list.
5.  **Provide Recommendations:** Offer personalized, constructive recommendations for improvement. These should be actionable suggestions for the student.
6.  **Overall Score & Feedback:** Provide an overall score out of 100 and a summary paragraph of feedback.
7.  **Evaluation Focus:** {focus}
8.  **Output Format:** Respond ONLY with a valid JSON object that adheres to the provided schema. Do not include any text before or after the JSON object."#
    )
}
