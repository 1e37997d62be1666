//! 採点履歴リストコンポーネント
//!
//! 常に新しい順（id降順）で表示する。スコアピルの色帯は
//! 総合点バナーと同じ帯分けを使う。

use grader_ai_common::{HistoryEntry, HistoryLog, ScoreBand};
use leptos::prelude::*;

#[component]
pub fn HistoryList<FS, FC>(
    history: ReadSignal<HistoryLog>,
    selected_id: ReadSignal<Option<i64>>,
    on_select: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(HistoryEntry) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_select = StoredValue::new(on_select);
    view! {
        <section class="history-panel">
            <div class="history-header">
                <h2>"採点履歴"</h2>
                <Show when=move || !history.get().is_empty()>
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_clear = on_clear.clone();
                            move |_| on_clear(())
                        }
                    >
                        "履歴を全消去"
                    </button>
                </Show>
            </div>

            <Show
                when=move || !history.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="history-empty">
                            <p>"過去の採点はまだありません"</p>
                            <p class="text-muted">"完了した採点はここに保存されます"</p>
                        </div>
                    }
                }
            >
                <div class="history-list">
                    <For
                        each=move || history.get().sorted_desc()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <HistoryItem
                                    entry=entry
                                    selected_id=selected_id
                                    on_select=on_select.get_value()
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn HistoryItem<FS>(
    entry: HistoryEntry,
    selected_id: ReadSignal<Option<i64>>,
    on_select: FS,
) -> impl IntoView
where
    FS: Fn(HistoryEntry) + 'static + Clone,
{
    let band = ScoreBand::for_overall(entry.overall_score);
    let entry_id = entry.id;
    let is_selected = move || selected_id.get() == Some(entry_id);

    view! {
        <button
            class="history-item"
            class:selected=is_selected
            on:click={
                let entry = entry.clone();
                move |_| on_select(entry.clone())
            }
        >
            <div class="history-item-info">
                <p class="file-name">{entry.file_name.clone()}</p>
                <p class="text-muted">{entry.date.clone()}</p>
            </div>
            <span class=format!("score-pill {}", band.css_class())>
                {format!("{:.0}", entry.overall_score)}
            </span>
        </button>
    }
}
