//! Campus Match 前端应用
//!
//! 每个 HTML 页面只加载一个控制器：
//! - `web::router`: 页面守卫（读取会话，未登录时整页重定向）
//! - `web`: 核心库 trait 的浏览器实现（fetch、localStorage、setTimeout）
//! - `components`: 各页面的 UI 组件，业务规则全部在核心库中

mod api;
mod auth;
mod components {
    pub mod avatar;
    pub mod chat;
    pub mod home;
    pub mod interest_picker;
    pub mod landing;
    pub mod login;
    pub mod nav_bar;
    pub mod profile;
    pub mod register;
}

use crate::components::chat::ChatPage;
use crate::components::home::HomePage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;

use campus_match::Page;
use leptos::prelude::*;

// 浏览器 API 封装模块
pub(crate) mod web {
    mod dialog;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use dialog::alert;
    pub use http::WebHttpClient;
    pub use router::{RouterService, use_router};
    pub use storage::LocalSessionStore;
    pub use timer::TimerPause;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据当前页面返回对应的视图组件。
fn route_matcher(page: Option<Page>) -> AnyView {
    match page {
        Some(Page::Index) => view! { <LandingPage /> }.into_any(),
        Some(Page::Login) => view! { <LoginPage /> }.into_any(),
        Some(Page::Register) => view! { <RegisterPage /> }.into_any(),
        Some(Page::Home) => view! { <HomePage /> }.into_any(),
        Some(Page::Profile) => view! { <ProfilePage /> }.into_any(),
        Some(Page::Chat) => view! { <ChatPage /> }.into_any(),
        None => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <a class="btn btn-link" href=Page::Index.to_path()>"Back to start"</a>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
