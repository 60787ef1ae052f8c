use crate::{
    AuthResponse, LikeResponse, MatchId, MatchSummary, Message, StatusResponse, UserId,
    UserProfile,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// GET requests carry their parameters in the path, POST requests are sent as a JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (without parameters).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the endpoint lives on the (optionally pinned) auth origin.
    const AUTH_ORIGIN: bool = false;

    /// The concrete path including path/query parameters.
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

/// Multipart registration endpoint. Not an `ApiRequest` because the body is a form.
pub const SIGNUP_PATH: &str = "/signup";

// =========================================================
// Request Definitions
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH_ORIGIN: bool = true;
}

/// Candidates for the discovery feed
#[derive(Debug, Clone, Serialize)]
pub struct ListCandidatesRequest {
    #[serde(skip)]
    pub user_id: UserId,
}

impl ApiRequest for ListCandidatesRequest {
    type Response = Vec<UserProfile>;
    const PATH: &'static str = "/users";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}?userId={}", Self::PATH, self.user_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeRequest {
    pub liker_id: UserId,
    pub liked_id: UserId,
}

impl ApiRequest for LikeRequest {
    type Response = LikeResponse;
    const PATH: &'static str = "/like";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize)]
pub struct ListMatchesRequest {
    #[serde(skip)]
    pub user_id: UserId,
}

impl ApiRequest for ListMatchesRequest {
    type Response = Vec<MatchSummary>;
    const PATH: &'static str = "/matches";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}?userId={}", Self::PATH, self.user_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListMessagesRequest {
    #[serde(skip)]
    pub match_id: MatchId,
}

impl ApiRequest for ListMessagesRequest {
    type Response = Vec<Message>;
    const PATH: &'static str = "/messages";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.match_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub match_id: MatchId,
    pub sender_id: UserId,
    pub message_text: String,
}

impl ApiRequest for SendMessageRequest {
    type Response = StatusResponse;
    const PATH: &'static str = "/send_message";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize)]
pub struct GetProfileRequest {
    #[serde(skip)]
    pub user_id: UserId,
}

impl ApiRequest for GetProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/profile";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.user_id)
    }
}

/// Partial profile update. `age` is sent as entered in the form.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub college: String,
    pub age: String,
    pub bio: String,
    pub interests: Vec<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = StatusResponse;
    const PATH: &'static str = "/update_profile";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterised_paths() {
        let user_id = UserId::from(12);
        assert_eq!(
            ListCandidatesRequest { user_id: user_id.clone() }.path(),
            "/users?userId=12"
        );
        assert_eq!(ListMatchesRequest { user_id: user_id.clone() }.path(), "/matches?userId=12");
        assert_eq!(GetProfileRequest { user_id }.path(), "/profile/12");
        assert_eq!(
            ListMessagesRequest { match_id: MatchId::from(4) }.path(),
            "/messages/4"
        );
    }

    #[test]
    fn update_profile_uses_backend_field_names() {
        let body = serde_json::to_value(UpdateProfileRequest {
            user_id: UserId::from("9"),
            full_name: "Ada".into(),
            college: "MIT".into(),
            age: "21".into(),
            bio: String::new(),
            interests: vec!["Art".into()],
        })
        .unwrap();
        assert_eq!(body["userId"], 9);
        assert_eq!(body["fullName"], "Ada");
        assert_eq!(body["interests"][0], "Art");
    }
}
