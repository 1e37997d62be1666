//! ルーブリック入力コンポーネント

use leptos::prelude::*;

#[component]
pub fn RubricEditor(
    rubric: ReadSignal<String>,
    set_rubric: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="rubric">"ルーブリック / 模範解答"</label>
            <textarea
                id="rubric"
                rows="8"
                placeholder="模範解答、採点基準、答案に含まれるべき要点などを入力..."
                prop:value=move || rubric.get()
                on:input=move |ev| {
                    set_rubric.set(event_target_value(&ev));
                }
            ></textarea>
        </div>
    }
}
