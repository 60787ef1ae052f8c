//! 页面地址
//!
//! 页面之间使用整页跳转，所有对 `window.location` 的操作都集中在这里。

use campus_match::Page;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 当前地址对应的页面；未知地址返回 `None`
pub fn current_page() -> Option<Page> {
    Page::from_path(&current_path())
}

/// 整页跳转，保留历史记录
pub fn go_to(page: Page) {
    tracing::debug!(%page, "navigating");
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&page.to_path());
    }
}

/// 整页跳转并替换当前历史记录（用于守卫重定向）
pub fn redirect(page: Page) {
    tracing::debug!(%page, "redirecting");
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(&page.to_path());
    }
}
