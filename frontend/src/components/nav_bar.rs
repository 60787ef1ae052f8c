//! 登录后页面共用的顶栏
//!
//! 欢迎语作为文本节点渲染，名字中的标记不会被解析。

use crate::web::use_router;
use campus_match::{Page, ShellOutcome};
use leptos::prelude::*;

#[component]
pub fn NavBar(active: Page) -> impl IntoView {
    let router = use_router();
    let banner = match router.outcome() {
        ShellOutcome::Authenticated { banner, .. } => banner.text(),
        _ => String::new(),
    };

    let link_class = move |page: Page| {
        if page == active {
            "btn btn-ghost btn-active"
        } else {
            "btn btn-ghost"
        }
    };

    let on_logout = move |_| router.logout();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl" href=Page::Home.to_path()>"Campus Match"</a>
                <span class="hidden md:inline text-base-content/70">{banner}</span>
            </div>
            <div class="flex-none gap-2">
                <a class=link_class(Page::Home) href=Page::Home.to_path()>"Discover"</a>
                <a class=link_class(Page::Chat) href=Page::Chat.to_path()>"Chat"</a>
                <a class=link_class(Page::Profile) href=Page::Profile.to_path()>"My Profile"</a>
                <button on:click=on_logout class="btn btn-outline btn-error">
                    "Logout"
                </button>
            </div>
        </div>
    }
}
