//! HTTP client for the newsroom API.
//!
//! A thin `reqwest` wrapper: one method per endpoint, bearer token attached
//! to every authenticated call. Errors are returned to the call site and
//! rendered there; nothing here retries, queues, or cancels.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use newsroom_articles::{Article, ReviewDecision};
use newsroom_auth::{Role, User};
use newsroom_core::{ArticleId, UserId};

/// Base path the SPA is served against.
pub const API_BASE: &str = "/api";

/// Failure of a single API call.
///
/// Every failure is terminal for that one attempt; retry is the user
/// re-invoking the action.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Network/transport failure, or a response body that did not parse.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no detail"))]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Message to display: the server-reported one when present, otherwise
    /// the call site's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Error bodies carry a human-readable `msg` field (`message` also seen).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    msg: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg)
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / response DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub assigned_editor_id: Option<UserId>,
    pub submit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
    pub submit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub action: ReviewAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<ReviewDecision> for ReviewRequest {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approve => Self {
                action: ReviewAction::Approve,
                comment: None,
            },
            ReviewDecision::Reject { comment } => Self {
                action: ReviewAction::Reject,
                comment: Some(comment),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleChangeRequest {
    pub role: Role,
}

/// The approved-articles endpoint answers either a bare array or a wrapper.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApprovedArticles {
    Wrapped { items: Vec<Article> },
    Plain(Vec<Article>),
}

impl ApprovedArticles {
    fn into_vec(self) -> Vec<Article> {
        match self {
            ApprovedArticles::Wrapped { items } => items,
            ApprovedArticles::Plain(items) => items,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Per-call-site handle to the API, carrying the session's bearer token.
///
/// Cheap to construct; views build one from the session context for each
/// interaction so the token is read at call time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            token,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(status = status.as_u16(), "api call failed");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Like [`execute`](Self::execute) for endpoints whose body is just an ack.
    async fn execute_ok(&self, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(())
    }

    // ── auth ────────────────────────────────────────────────────────────────

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(self.request(reqwest::Method::POST, "/auth/login").json(&body))
            .await
    }

    // ── articles ────────────────────────────────────────────────────────────

    /// Approved articles, optionally filtered by a free-text query over
    /// title/author. A blank query returns the unfiltered list.
    pub async fn approved_articles(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        let mut req = self.request(reqwest::Method::GET, "/articles/approved");
        if !query.trim().is_empty() {
            req = req.query(&[("q", query)]);
        }
        let parsed: ApprovedArticles = self.execute(req).await?;
        Ok(parsed.into_vec())
    }

    /// The caller's own articles, any status.
    pub async fn my_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/articles/mine"))
            .await
    }

    /// Submitted articles assigned to the calling editor.
    pub async fn assigned_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/articles/assigned"))
            .await
    }

    /// Articles the calling editor has already reviewed.
    pub async fn reviewed_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/articles/reviewed"))
            .await
    }

    pub async fn create_article(&self, body: &CreateArticleRequest) -> Result<Article, ApiError> {
        self.execute(self.request(reqwest::Method::POST, "/articles/create").json(body))
            .await
    }

    pub async fn update_article(
        &self,
        id: ArticleId,
        body: &UpdateArticleRequest,
    ) -> Result<Article, ApiError> {
        self.execute(
            self.request(reqwest::Method::PUT, &format!("/articles/{id}"))
                .json(body),
        )
        .await
    }

    pub async fn review_article(
        &self,
        id: ArticleId,
        body: &ReviewRequest,
    ) -> Result<Article, ApiError> {
        self.execute(
            self.request(reqwest::Method::POST, &format!("/articles/{id}/review"))
                .json(body),
        )
        .await
    }

    // ── users / admin ───────────────────────────────────────────────────────

    /// Editors eligible for assignment.
    pub async fn editors(&self) -> Result<Vec<User>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/users/editors"))
            .await
    }

    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/admin/users"))
            .await
    }

    pub async fn admin_approved_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.execute(self.request(reqwest::Method::GET, "/admin/approved-articles"))
            .await
    }

    pub async fn change_role(&self, user: UserId, role: Role) -> Result<(), ApiError> {
        let body = RoleChangeRequest { role };
        self.execute_ok(
            self.request(reqwest::Method::POST, &format!("/admin/role/{user}"))
                .json(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_reads_msg_field() {
        assert_eq!(
            error_message(r#"{"msg": "token expired"}"#).as_deref(),
            Some("token expired")
        );
    }

    #[test]
    fn error_message_accepts_message_alias() {
        assert_eq!(
            error_message(r#"{"message": "forbidden"}"#).as_deref(),
            Some("forbidden")
        );
    }

    #[test]
    fn error_message_tolerates_garbage_bodies() {
        assert!(error_message("<html>502</html>").is_none());
        assert!(error_message("").is_none());
        assert!(error_message(r#"{"other": 1}"#).is_none());
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ApiError::Server {
            status: 400,
            message: Some("title taken".into()),
        };
        assert_eq!(err.user_message("Create failed"), "title taken");

        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Create failed"), "Create failed");

        let err = ApiError::Transport("connection reset".into());
        assert_eq!(err.user_message("Create failed"), "Create failed");
    }

    #[test]
    fn create_request_uses_camel_case_editor_field() {
        let body = CreateArticleRequest {
            title: "T".into(),
            content: "C".into(),
            assigned_editor_id: None,
            submit: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("assignedEditorId").is_some());
        assert_eq!(json["submit"], true);
    }

    #[test]
    fn review_request_serializes_action_lowercase() {
        let approve = ReviewRequest::from(ReviewDecision::Approve);
        let json = serde_json::to_value(&approve).unwrap();
        assert_eq!(json["action"], "approve");
        assert!(json.get("comment").is_none());

        let reject = ReviewRequest::from(ReviewDecision::Reject {
            comment: "thin sourcing".into(),
        });
        let json = serde_json::to_value(&reject).unwrap();
        assert_eq!(json["action"], "reject");
        assert_eq!(json["comment"], "thin sourcing");
    }

    #[test]
    fn approved_articles_accepts_both_shapes() {
        let plain: ApprovedArticles = serde_json::from_str("[]").unwrap();
        assert!(plain.into_vec().is_empty());

        let wrapped: ApprovedArticles = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(wrapped.into_vec().is_empty());
    }
}
