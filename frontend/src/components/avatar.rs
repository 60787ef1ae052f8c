use campus_match::view::Avatar;
use leptos::prelude::*;

/// 照片或首字母头像
#[component]
pub fn AvatarView(avatar: Avatar, #[prop(optional, into)] classes: String) -> impl IntoView {
    match avatar {
        Avatar::Photo { url, alt } => view! {
            <img class=format!("object-cover {}", classes) src=url alt=alt />
        }
        .into_any(),
        Avatar::Initial(initial) => view! {
            <div class=format!(
                "flex items-center justify-center bg-primary text-primary-content font-bold {}",
                classes,
            )>{initial}</div>
        }
        .into_any(),
    }
}
