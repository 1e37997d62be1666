//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI答案採点 - Answer Sheet Grader"</h1>
        </header>
    }
}
