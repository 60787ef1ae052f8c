//! LocalStorage 会话存储
//!
//! 登录身份以两个原始字符串键（`userId` / `userName`）保存，
//! 不经过 JSON 编码，与后端页面共用同一份存储。

use campus_match::SessionStore;
use campus_match::session::session_from_entries;
use campus_match_shared::{STORAGE_USER_ID_KEY, STORAGE_USER_NAME_KEY, Session};
use gloo_storage::{LocalStorage, Storage};

#[derive(Clone, Copy, Default)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    fn read(key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, error = ?e, "failed to write local storage");
        }
    }
}

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<Session> {
        session_from_entries(
            Self::read(STORAGE_USER_ID_KEY),
            Self::read(STORAGE_USER_NAME_KEY),
        )
    }

    fn set(&self, session: &Session) {
        Self::write(STORAGE_USER_ID_KEY, session.user_id.as_str());
        Self::write(STORAGE_USER_NAME_KEY, &session.user_name);
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}
