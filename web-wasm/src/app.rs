//! メインアプリケーションコンポーネント

use grader_ai_common::{Error, EvaluationPreset, EvaluationResult, HistoryEntry};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api::gemini;
use crate::components::{
    header::Header, history_list::HistoryList, preset_select::PresetSelect,
    report::EvaluationReport, rubric_editor::RubricEditor, settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::storage;

/// 選択中の答案ファイル
#[derive(Clone, PartialEq)]
pub struct SheetFile {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}

/// 送信可否判定
///
/// ファイル・ルーブリック・APIキーが揃っていて、かつ採点中でないこと。
pub(crate) fn can_submit(
    has_file: bool,
    has_rubric: bool,
    has_api_key: bool,
    evaluating: bool,
) -> bool {
    has_file && has_rubric && has_api_key && !evaluating
}

/// 表示用日時文字列（ブラウザのロケール設定に従う）
fn current_datetime_label() -> String {
    js_sys::Date::new_0()
        .to_locale_string("ja-JP", &JsValue::UNDEFINED)
        .into()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (api_key, set_api_key) = signal(String::new());
    let (sheet_file, set_sheet_file) = signal(None::<SheetFile>);
    let (rubric, set_rubric) = signal(String::new());
    let (preset, set_preset) = signal(EvaluationPreset::default());
    let (result, set_result) = signal(None::<EvaluationResult>);
    let (is_evaluating, set_is_evaluating) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (history, set_history) = signal(storage::load_history());
    let (selected_history_id, set_selected_history_id) = signal(None::<i64>);

    let submit_enabled = move || {
        can_submit(
            sheet_file.get().is_some(),
            !rubric.get().trim().is_empty(),
            !api_key.get().is_empty(),
            is_evaluating.get(),
        )
    };

    // 採点開始ハンドラ
    let on_evaluate = move |_| {
        let Some(file) = sheet_file.get_untracked() else {
            set_error.set(Some("答案ファイルをアップロードしてください".to_string()));
            return;
        };
        let rubric_text = rubric.get_untracked();
        if rubric_text.trim().is_empty() {
            set_error.set(Some("ルーブリックを入力してください".to_string()));
            return;
        }
        if is_evaluating.get_untracked() {
            return;
        }

        // 新しい採点を始める前に前回の表示状態を片付ける
        set_error.set(None);
        set_result.set(None);
        set_selected_history_id.set(None);
        set_is_evaluating.set(true);

        let key = api_key.get_untracked();
        let preset_value = preset.get_untracked();
        spawn_local(async move {
            match gemini::evaluate_sheet(&key, &file.data_url, &rubric_text, preset_value).await {
                Ok(evaluation) => {
                    let entry = HistoryEntry::new(
                        js_sys::Date::now() as i64,
                        current_datetime_label(),
                        file.file_name.clone(),
                        rubric_text,
                        evaluation.clone(),
                    );
                    set_result.set(Some(evaluation));
                    // 保存は履歴更新と同時に行う。失敗しても表示は続行。
                    set_history.update(|log| {
                        log.prepend(entry);
                        storage::save_history(log);
                    });
                }
                Err(Error::Parse(_)) => {
                    set_error.set(Some(
                        "AIの応答形式が不正でした。もう一度お試しください。".to_string(),
                    ));
                }
                Err(e) => {
                    set_error.set(Some(format!("採点中にエラーが発生しました: {}", e)));
                }
            }
            set_is_evaluating.set(false);
        });
    };

    // 履歴選択ハンドラ（再採点せず保存済みresultをそのまま表示）
    let on_select_history = move |entry: HistoryEntry| {
        set_result.set(Some(entry.result.clone()));
        set_selected_history_id.set(Some(entry.id));
        set_error.set(None);
    };

    // 履歴全消去ハンドラ
    let on_clear_history = move |_| {
        // 表示中の結果が履歴由来なら表示も消す
        if selected_history_id.get_untracked().is_some() {
            set_result.set(None);
        }
        set_history.update(|log| log.clear());
        set_selected_history_id.set(None);
        storage::clear_history();
    };

    view! {
        <div class="container">
            <Header />

            <main class="main-grid">
                <section class="input-panel">
                    <h2>"採点の設定"</h2>

                    <SettingsPanel api_key=api_key set_api_key=set_api_key />

                    <UploadArea
                        sheet_file=sheet_file
                        on_file_selected=move |file| {
                            set_sheet_file.set(Some(file));
                        }
                    />

                    <RubricEditor rubric=rubric set_rubric=set_rubric />

                    <PresetSelect preset=preset set_preset=set_preset />

                    <button
                        class="btn btn-primary btn-evaluate"
                        disabled=move || !submit_enabled()
                        on:click=on_evaluate
                    >
                        {move || if is_evaluating.get() { "採点中..." } else { "AI採点開始" }}
                    </button>

                    {move || {
                        error
                            .get()
                            .map(|msg| view! { <p class="error-message">{msg}</p> })
                    }}
                </section>

                <section class="report-panel">
                    <h2>"採点レポート"</h2>

                    <Show when=move || is_evaluating.get()>
                        <div class="report-placeholder">
                            <p>"答案を解析しています..."</p>
                            <p class="text-muted">
                                "AIが筆跡を読み取り、ルーブリックと照合しています"
                            </p>
                        </div>
                    </Show>

                    {move || {
                        result
                            .get()
                            .map(|r| view! { <EvaluationReport result=r /> })
                    }}

                    <Show when=move || result.get().is_none() && !is_evaluating.get()>
                        <div class="report-placeholder">
                            <p>"採点が完了するとここにレポートが表示されます"</p>
                            <p class="text-muted">"答案とルーブリックを入力してください"</p>
                        </div>
                    </Show>
                </section>
            </main>

            <HistoryList
                history=history
                selected_id=selected_history_id
                on_select=on_select_history
                on_clear=on_clear_history
            />
        </div>
    }
}
