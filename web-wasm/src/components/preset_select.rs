//! 評価プリセット選択コンポーネント

use grader_ai_common::EvaluationPreset;
use leptos::prelude::*;

#[component]
pub fn PresetSelect(
    preset: ReadSignal<EvaluationPreset>,
    set_preset: WriteSignal<EvaluationPreset>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="preset">"評価プリセット"</label>
            <select
                id="preset"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_preset.set(EvaluationPreset::from_id(&value).unwrap_or_default());
                }
            >
                {EvaluationPreset::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <option value=p.id() selected=move || preset.get() == p>
                                {p.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <p class="text-muted">"プリセットで採点の重点を切り替えます"</p>
        </div>
    }
}
