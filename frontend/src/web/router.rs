//! 页面守卫与出口
//!
//! 每次页面加载只运行一次：解析地址、读取会话、交给 `NavShell` 判断。
//! 需要跳转时直接整页重定向，不渲染任何页面内容。

use campus_match::{NavShell, Page, ShellOutcome};
use campus_match_shared::Session;
use leptos::prelude::*;

use super::route::{current_page, go_to, redirect};
use super::storage::LocalSessionStore;

/// 守卫结果，通过 Context 提供给页面组件
#[derive(Clone)]
pub struct RouterService {
    page: Option<Page>,
    outcome: ShellOutcome,
}

impl RouterService {
    fn boot() -> Self {
        let page = current_page();
        let outcome = NavShell::new(LocalSessionStore).boot(page);
        if let ShellOutcome::Redirect(target) = &outcome {
            redirect(*target);
        }
        Self { page, outcome }
    }

    /// 当前页面；`None` 表示未知地址
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn outcome(&self) -> &ShellOutcome {
        &self.outcome
    }

    pub fn session(&self) -> Option<Session> {
        match &self.outcome {
            ShellOutcome::Authenticated { session, .. } => Some(session.clone()),
            _ => None,
        }
    }

    /// 整页跳转到另一个页面
    pub fn navigate(&self, page: Page) {
        go_to(page);
    }

    /// 清空会话并回到登录页
    pub fn logout(&self) {
        let target = NavShell::new(LocalSessionStore).logout();
        go_to(target);
    }
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_context(RouterService::boot());
    children()
}

/// 路由出口组件
///
/// 守卫要求跳转时渲染空白，否则按当前页面渲染对应组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前页面，返回对应视图
    matcher: fn(Option<Page>) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    match router.outcome() {
        ShellOutcome::Redirect(_) => ().into_any(),
        _ => matcher(router.page()),
    }
}
