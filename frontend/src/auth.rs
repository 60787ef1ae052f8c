//! 认证模块
//!
//! 登录/注册表单共用的提交流程：调用核心控制器，弹出服务端消息，
//! 成功后整页跳转到发现页。

use crate::api::web_api;
use crate::web::{LocalSessionStore, RouterService, WebHttpClient, alert, use_router};
use campus_match::auth::{LOGIN_FAILURE_MESSAGE, REGISTRATION_FAILURE_MESSAGE};
use campus_match::{AuthController, AuthSuccess, LoginForm, MatchResult, RegistrationWizard};
use campus_match_shared::Session;

pub type WebAuthController = AuthController<WebHttpClient, LocalSessionStore>;

pub fn auth_controller() -> WebAuthController {
    AuthController::new(web_api(), LocalSessionStore)
}

/// 受保护页面中的当前会话
///
/// 守卫已保证受保护页面一定有会话，这里的 `expect` 只在页面被错误地
/// 注册为公开页面时触发。
pub fn use_session() -> Session {
    use_router()
        .session()
        .expect("protected page rendered without a session")
}

fn finish(router: &RouterService, result: MatchResult<AuthSuccess>, fallback: &str) -> bool {
    match result {
        Ok(success) => {
            if !success.message.is_empty() {
                alert(&success.message);
            }
            router.navigate(success.redirect);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "authentication failed");
            alert(e.user_message(fallback));
            false
        }
    }
}

/// 登录；返回是否成功
///
/// `router` 需在进入异步任务前从 Context 中取出。
pub async fn login(router: RouterService, form: LoginForm) -> bool {
    let result = auth_controller().login(&form).await;
    finish(&router, result, LOGIN_FAILURE_MESSAGE)
}

/// 提交注册向导；返回是否成功
pub async fn register(router: RouterService, wizard: RegistrationWizard) -> bool {
    let result = auth_controller().register(&wizard).await;
    finish(&router, result, REGISTRATION_FAILURE_MESSAGE)
}
