use crate::models::{ContentItem, ContentKind};
use crate::storage::TOKEN_KEY;
use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    pub(crate) fn http(status: StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub log_level: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        let mut cfg = Self::with_api_url(DEFAULT_API_URL);

        // Deployments inject `window.ENV`. Both README style (`API_URL`) and
        // lowercase keys are accepted.
        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return cfg;
        };
        if env.is_undefined() || !env.is_object() {
            return cfg;
        }

        let read = |keys: [&str; 2]| {
            keys.into_iter().find_map(|key| {
                js_sys::Reflect::get(&env, &key.into())
                    .ok()
                    .and_then(|v| v.as_string())
            })
        };

        if let Some(url) = read(["API_URL", "api_url"]) {
            cfg.api_url = Self::with_api_url(&url).api_url;
        }
        cfg.log_level = read(["LOG_LEVEL", "log_level"]);
        cfg
    }

    fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            log_level: None,
        }
    }

    /// Unknown or missing levels fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /{kind}s/get/{containerId}`
pub(crate) fn list_path(kind: ContentKind, container_id: &str) -> String {
    format!(
        "/{}/get/{}",
        kind.collection(),
        urlencoding::encode(container_id)
    )
}

/// `DELETE /{kind}s/delete/{id}`
pub(crate) fn delete_path(kind: ContentKind, id: &str) -> String {
    format!("/{}/delete/{}", kind.collection(), urlencoding::encode(id))
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn load_from_storage() -> Self {
        let mut client = Self::new(EnvConfig::new().api_url);
        client.token = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|t| !t.trim().is_empty());
        client
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn with_auth_headers(
        mut req: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        req
    }

    async fn send(&self, method: Method, path: &str, ctx: &str) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let req = Self::with_auth_headers(client.request(method, url), self.token.as_deref());

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else if res.status() == StatusCode::UNAUTHORIZED {
            Err(ApiError::unauthorized())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    /// Children of `container_id`, in backend order.
    pub async fn list_contents(
        &self,
        kind: ContentKind,
        container_id: &str,
    ) -> ApiResult<Vec<ContentItem>> {
        let res = self
            .send(Method::GET, &list_path(kind, container_id), "List failed")
            .await?;
        let data: serde_json::Value = res.json().await.map_err(ApiError::parse)?;
        Self::parse_content_list_response(data)
    }

    /// The response body is ignored; any 2xx counts as deleted.
    pub async fn delete_content(&self, kind: ContentKind, id: &str) -> ApiResult<()> {
        self.send(Method::DELETE, &delete_path(kind, id), "Delete failed")
            .await
            .map(|_| ())
    }

    pub(crate) fn parse_content_list_response(
        data: serde_json::Value,
    ) -> ApiResult<Vec<ContentItem>> {
        let serde_json::Value::Array(list) = data else {
            return Err(ApiError::parse("expected a JSON array of items"));
        };

        let mut out: Vec<ContentItem> = Vec::with_capacity(list.len());
        for item in list {
            let item: ContentItem = serde_json::from_value(item).map_err(ApiError::parse)?;
            if item.id.trim().is_empty() {
                return Err(ApiError::parse("item without id"));
            }
            out.push(item);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_scopes_by_kind_and_container() {
        assert_eq!(list_path(ContentKind::Note, "root-1"), "/notes/get/root-1");
        assert_eq!(list_path(ContentKind::Folder, "f 2"), "/folders/get/f%202");
    }

    #[test]
    fn test_delete_path_uses_item_id() {
        assert_eq!(delete_path(ContentKind::Note, "abc"), "/notes/delete/abc");
        assert_eq!(delete_path(ContentKind::Group, "g1"), "/grps/delete/g1");
    }

    #[test]
    fn test_parse_content_list_preserves_order() {
        let data = serde_json::json!([
            {"id": "b", "title": "Y", "timestamp": "t2"},
            {"id": "a", "title": "X", "timestamp": "t1"},
            {"id": "f", "name": "Folder"}
        ]);
        let items = ApiClient::parse_content_list_response(data).expect("list should parse");
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "f"]);
        assert_eq!(items[2].display_name(), "Folder");
    }

    #[test]
    fn test_parse_content_list_empty_array() {
        let items = ApiClient::parse_content_list_response(serde_json::json!([]))
            .expect("empty list should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_content_list_rejects_non_array() {
        let err = ApiClient::parse_content_list_response(serde_json::json!({"items": []}))
            .expect_err("object body is not a listing");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_parse_content_list_rejects_missing_id() {
        let err = ApiClient::parse_content_list_response(serde_json::json!([{"title": "x"}]))
            .expect_err("item without id");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_http_error_message_includes_status() {
        let e = ApiError::http(StatusCode::NOT_FOUND, "gone".to_string(), "Delete failed");
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "Delete failed (404 Not Found): gone");
    }

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:5000/api/v1".to_string());
        assert_eq!(client.base_url, "http://localhost:5000/api/v1");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_env_config_level_filter() {
        let mut cfg = EnvConfig::with_api_url(DEFAULT_API_URL);
        assert_eq!(cfg.level_filter(), log::LevelFilter::Info);

        cfg.log_level = Some("debug".to_string());
        assert_eq!(cfg.level_filter(), log::LevelFilter::Debug);

        cfg.log_level = Some("loud".to_string());
        assert_eq!(cfg.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_env_config_trims_trailing_slash() {
        let cfg = EnvConfig::with_api_url("http://example.com/api/v1/");
        assert_eq!(cfg.api_url, "http://example.com/api/v1");
    }
}
