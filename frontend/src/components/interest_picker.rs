//! 兴趣标签选择器
//!
//! 只负责渲染目录中的全部标签，选择规则（上下限）由调用方的核心状态处理。

use campus_match_shared::interests::INTEREST_CATALOG;
use leptos::prelude::*;

#[component]
pub fn InterestPicker(
    /// 当前选中的标签
    #[prop(into)]
    selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {INTEREST_CATALOG
                .into_iter()
                .map(|tag| {
                    let class = move || {
                        if selected.with(|s| s.iter().any(|t| t == tag)) {
                            "badge badge-lg badge-primary cursor-pointer"
                        } else {
                            "badge badge-lg badge-outline cursor-pointer"
                        }
                    };
                    view! {
                        <span class=class on:click=move |_| on_toggle.run(tag)>
                            {tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
