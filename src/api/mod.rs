pub(crate) mod feeds;
pub(crate) mod queries;
#[cfg(test)]
pub(crate) mod testing;

use crate::config::EnvConfig;
use crate::models::{Channel, HistoryEntry, Space, Subscription, Video, WatchLaterEntry};
use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use serde::de::DeserializeOwned;
use std::future::Future;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
    Timeout,
    /// The request was abandoned before it resolved (cache cleared underneath it).
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::timeout_after(None);
        }
        Self {
            kind: ApiErrorKind::Network,
            message: format!("Failed to connect to backend: {e}"),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: format!("Unexpected response: {e}"),
        }
    }

    pub(crate) fn http(status: u16, body: &str, ctx: &str) -> Self {
        let body = body.trim();
        Self {
            kind: ApiErrorKind::Http,
            message: if body.is_empty() {
                format!("{ctx} (HTTP {status})")
            } else {
                format!("{ctx} (HTTP {status}): {body}")
            },
        }
    }

    pub(crate) fn timeout_after(ms: Option<u32>) -> Self {
        Self {
            kind: ApiErrorKind::Timeout,
            message: match ms {
                Some(ms) => format!("Request timed out after {ms} ms"),
                None => "Request timed out".to_string(),
            },
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self {
            kind: ApiErrorKind::Cancelled,
            message: "Request was cancelled".to_string(),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Read-only catalog endpoints consumed by the views.
///
/// `ApiClient` is the HTTP implementation; composite feeds and queries are generic
/// over this trait so they run against an in-memory catalog in tests.
#[allow(async_fn_in_trait)]
pub(crate) trait CatalogApi {
    async fn list_videos(&self, category: Option<&str>) -> ApiResult<Vec<Video>>;
    async fn trending_videos(&self) -> ApiResult<Vec<Video>>;
    async fn search_videos(&self, query: &str) -> ApiResult<Vec<Video>>;
    async fn get_video(&self, id: &str) -> ApiResult<Video>;
    async fn videos_by_channels(&self, channel_ids: &[String]) -> ApiResult<Vec<Video>>;
    async fn subscriptions(&self, user_id: &str) -> ApiResult<Vec<Subscription>>;
    async fn list_channels(&self) -> ApiResult<Vec<Channel>>;
    async fn get_channel(&self, id: &str) -> ApiResult<Channel>;
    async fn channel_videos(&self, id: &str) -> ApiResult<Vec<Video>>;
    async fn list_spaces(&self) -> ApiResult<Vec<Space>>;
    async fn get_space(&self, id: &str) -> ApiResult<Space>;
    async fn history(&self, user_id: &str) -> ApiResult<Vec<HistoryEntry>>;
    async fn watch_later(&self, user_id: &str) -> ApiResult<Vec<WatchLaterEntry>>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn from_config(cfg: &EnvConfig) -> Self {
        Self::new(cfg.api_url.clone(), cfg.request_timeout_ms)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let mut req = client.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            req = req.timeout(std::time::Duration::from_millis(u64::from(self.timeout_ms)));
        }

        log::debug!("GET {path} {query:?}");
        let result = with_timeout(Self::send_json(req), timer(self.timeout_ms), self.timeout_ms).await;
        if let Err(e) = &result {
            log::warn!("GET {path} failed: {e}");
        }
        result
    }

    async fn send_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> ApiResult<T> {
        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();

        if status.is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status.as_u16(), &body, "Request failed"))
        }
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}

impl CatalogApi for ApiClient {
    async fn list_videos(&self, category: Option<&str>) -> ApiResult<Vec<Video>> {
        let query: Vec<(&str, String)> = category
            .filter(|c| !c.trim().is_empty())
            .map(|c| ("category", c.to_string()))
            .into_iter()
            .collect();
        self.get_json("/api/videos", &query).await
    }

    async fn trending_videos(&self) -> ApiResult<Vec<Video>> {
        self.get_json("/api/videos/trending", &[]).await
    }

    async fn search_videos(&self, query: &str) -> ApiResult<Vec<Video>> {
        self.get_json("/api/videos/search", &[("q", query.trim().to_string())])
            .await
    }

    async fn get_video(&self, id: &str) -> ApiResult<Video> {
        self.get_json(&format!("/api/videos/{}", segment(id)), &[]).await
    }

    async fn videos_by_channels(&self, channel_ids: &[String]) -> ApiResult<Vec<Video>> {
        self.get_json(
            "/api/videos/by-channels",
            &[("channelIds", channel_ids.join(","))],
        )
        .await
    }

    async fn subscriptions(&self, user_id: &str) -> ApiResult<Vec<Subscription>> {
        self.get_json(&format!("/api/subscriptions/{}", segment(user_id)), &[])
            .await
    }

    async fn list_channels(&self) -> ApiResult<Vec<Channel>> {
        self.get_json("/api/channels", &[]).await
    }

    async fn get_channel(&self, id: &str) -> ApiResult<Channel> {
        self.get_json(&format!("/api/channels/{}", segment(id)), &[]).await
    }

    async fn channel_videos(&self, id: &str) -> ApiResult<Vec<Video>> {
        self.get_json(&format!("/api/channels/{}/videos", segment(id)), &[])
            .await
    }

    async fn list_spaces(&self) -> ApiResult<Vec<Space>> {
        self.get_json("/api/spaces", &[]).await
    }

    async fn get_space(&self, id: &str) -> ApiResult<Space> {
        self.get_json(&format!("/api/spaces/{}", segment(id)), &[]).await
    }

    async fn history(&self, user_id: &str) -> ApiResult<Vec<HistoryEntry>> {
        self.get_json(&format!("/api/history/{}", segment(user_id)), &[])
            .await
    }

    async fn watch_later(&self, user_id: &str) -> ApiResult<Vec<WatchLaterEntry>> {
        self.get_json(&format!("/api/watch-later/{}", segment(user_id)), &[])
            .await
    }
}

/// Races `request` against `timer`; the timer winning yields a `Timeout` error.
pub(crate) async fn with_timeout<T>(
    request: impl Future<Output = ApiResult<T>>,
    timer: impl Future<Output = ()>,
    timeout_ms: u32,
) -> ApiResult<T> {
    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(timer);

    match future::select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::timeout_after(Some(timeout_ms))),
    }
}

#[cfg(target_arch = "wasm32")]
fn timer(ms: u32) -> LocalBoxFuture<'static, ()> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web_sys::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
        }
    });
    async move {
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
    .boxed_local()
}

// Off-browser the reqwest client enforces the timeout itself.
#[cfg(not(target_arch = "wasm32"))]
fn timer(_ms: u32) -> LocalBoxFuture<'static, ()> {
    future::pending().boxed_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3001/", 1000);
        assert_eq!(client.base_url, "http://localhost:3001");
        assert_eq!(client.url("/api/videos"), "http://localhost:3001/api/videos");
    }

    #[test]
    fn test_api_client_from_config() {
        let cfg = EnvConfig {
            api_url: "https://tube.example".to_string(),
            request_timeout_ms: 900,
            ..Default::default()
        };
        let client = ApiClient::from_config(&cfg);
        assert_eq!(client.base_url, "https://tube.example");
        assert_eq!(client.timeout_ms, 900);
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(segment(" a/b c "), "a%2Fb%20c");
    }

    #[test]
    fn test_http_error_message_includes_status_and_body() {
        let e = ApiError::http(503, "down for maintenance\n", "Request failed");
        assert_eq!(e.kind, ApiErrorKind::Http);
        assert_eq!(e.to_string(), "Request failed (HTTP 503): down for maintenance");

        let e = ApiError::http(404, "", "Request failed");
        assert_eq!(e.to_string(), "Request failed (HTTP 404)");
    }

    #[test]
    fn test_with_timeout_request_wins() {
        let out = block_on(with_timeout(
            async { Ok::<_, ApiError>(7) },
            future::pending::<()>(),
            10,
        ));
        assert_eq!(out, Ok(7));
    }

    #[test]
    fn test_with_timeout_timer_wins() {
        let out = block_on(with_timeout(
            future::pending::<ApiResult<u8>>(),
            future::ready(()),
            250,
        ));
        let err = out.expect_err("timer should win");
        assert_eq!(err.kind, ApiErrorKind::Timeout);
        assert_eq!(err.to_string(), "Request timed out after 250 ms");
    }
}
