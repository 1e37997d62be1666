//! 答案アップロードコンポーネント
//!
//! ドラッグ&ドロップとクリック選択の両方に対応。画像またはPDFを
//! 1枚だけ受け付け、Data URLに読み込んでから親へ渡す。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

use crate::app::SheetFile;

/// 受付サイズ上限（10MB）
const MAX_FILE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// ファイルの受付判定
///
/// 画像（image/*）またはPDFのみ。上限超過と未対応形式は
/// ネットワークに触れる前にここで弾く。
fn validate_file(mime_type: &str, size: f64) -> Result<(), String> {
    if !(mime_type.starts_with("image/") || mime_type == "application/pdf") {
        return Err("未対応のファイル形式です（画像またはPDFのみ）".to_string());
    }
    if size > MAX_FILE_BYTES {
        return Err("ファイルサイズが10MBを超えています".to_string());
    }
    Ok(())
}

#[component]
pub fn UploadArea<F>(
    sheet_file: ReadSignal<Option<SheetFile>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(SheetFile) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (reject_message, set_reject_message) = signal(None::<String>);

    let handle_file = {
        let on_file_selected = on_file_selected.clone();
        move |file: File| {
            if let Err(msg) = validate_file(&file.type_(), file.size()) {
                set_reject_message.set(Some(msg));
                return;
            }
            set_reject_message.set(None);
            read_file(file, on_file_selected.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*,application/pdf");

            let handle_file = handle_file.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let Some(target) = ev.target() else {
                    return;
                };
                let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                    return;
                };
                if let Some(files) = input.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div class="form-group">
            <label>"答案シート"</label>
            <div
                class=move || {
                    if is_dragover.get() {
                        "upload-area dragover"
                    } else {
                        "upload-area"
                    }
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                {move || match sheet_file.get() {
                    Some(file) => {
                        let preview = file
                            .mime_type
                            .starts_with("image/")
                            .then(|| view! { <img src=file.data_url.clone() alt="答案プレビュー" /> });
                        view! {
                            <div class="upload-selected">
                                {preview}
                                <p class="file-name">{file.file_name.clone()}</p>
                                <p class="text-muted">
                                    "クリックまたはドロップで別のファイルに差し替え"
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! {
                        <div class="upload-placeholder">
                            <p>"答案をドラッグ&ドロップ または クリックして選択"</p>
                            <p class="text-muted">"対応形式: JPEG, PNG, PDF（10MBまで）"</p>
                        </div>
                    }
                        .into_any(),
                }}
            </div>
            {move || {
                reject_message
                    .get()
                    .map(|msg| view! { <p class="error-message">{msg}</p> })
            }}
        </div>
    }
}

/// FileをData URLに読み込み、完了時にSheetFileとして親へ渡す
fn read_file<F>(file: File, on_file_selected: F)
where
    F: Fn(SheetFile) + 'static,
{
    let file_name = file.name();
    let mime_type = file.type_();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_file_selected(SheetFile {
                    file_name: file_name.clone(),
                    mime_type: mime_type.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
