use serde::{Deserialize, Serialize};

pub mod id;
pub mod interests;
pub mod protocol;

pub use id::{MatchId, UserId};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 本地存储中保存用户 id 的键
pub const STORAGE_USER_ID_KEY: &str = "userId";
/// 本地存储中保存显示名的键
pub const STORAGE_USER_NAME_KEY: &str = "userName";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 本地持久化的登录身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub user_name: String,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

/// 后端响应里的 `status` 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    #[serde(other)]
    Error,
}

impl ResponseStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseStatus::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub preference: Option<String>,
    /// 逗号拼接的兴趣标签
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn interest_tags(&self) -> Vec<String> {
        self.interests
            .as_deref()
            .map(interests::split_interests)
            .unwrap_or_default()
    }

    /// 没有头像时用于占位的首字母
    pub fn initial(&self) -> String {
        name_initial(&self.full_name)
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.profile_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

pub fn name_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| "?".to_string())
}

/// 登录/注册成功后返回的用户摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
}

impl From<AuthUser> for Session {
    fn from(user: AuthUser) -> Self {
        Session {
            user_id: user.id,
            user_name: user.full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub status: Option<ResponseStatus>,
    #[serde(rename = "match", default)]
    pub matched: bool,
}

/// 配对列表中的一项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: MatchId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(rename = "fullName", alias = "fullname")]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<u64>,
    pub match_id: MatchId,
    pub sender_id: UserId,
    pub message_text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_lowercase_full_name() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 3, "fullname": "Ada", "age": null, "interests": "Art, AI"}"#,
        )
        .unwrap();
        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.age, None);
        assert_eq!(profile.interest_tags(), vec!["Art", "AI"]);
        assert_eq!(profile.initial(), "A");
    }

    #[test]
    fn unknown_status_is_treated_as_error() {
        let res: StatusResponse = serde_json::from_str(r#"{"status": "weird"}"#).unwrap();
        assert!(!res.status.is_success());
    }

    #[test]
    fn like_response_reads_match_flag() {
        let res: LikeResponse =
            serde_json::from_str(r#"{"status": "success", "match": true}"#).unwrap();
        assert!(res.matched);
    }
}
