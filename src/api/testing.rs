//! In-memory catalog for exercising queries and feeds without a backend.

use crate::api::{ApiError, ApiResult, CatalogApi};
use crate::models::{
    Channel, ChannelSummary, HistoryEntry, Space, SpaceColor, Subscription, Video, WatchLaterEntry,
};
use futures::future::poll_fn;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::task::Poll;

/// Suspends exactly once so other joined futures get polled in between.
pub(crate) async fn yield_once() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

pub(crate) fn video(id: &str, channel_id: &str, category: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        thumbnail_url: format!("https://img.example/{id}.jpg"),
        duration: "4:20".to_string(),
        view_count: 1_000,
        channel: ChannelSummary {
            id: channel_id.to_string(),
            name: format!("Channel {channel_id}"),
            avatar_url: None,
        },
        is_live: false,
        category: category.to_string(),
        description: String::new(),
    }
}

pub(crate) fn channel(id: &str) -> Channel {
    Channel {
        id: id.to_string(),
        name: format!("Channel {id}"),
        handle: format!("@{id}"),
        ..Default::default()
    }
}

pub(crate) fn space_with(id: &str, name: &str, channels: Vec<Channel>) -> Space {
    Space {
        id: id.to_string(),
        name: name.to_string(),
        color: SpaceColor::default(),
        video_count: 0,
        channels,
    }
}

#[derive(Default)]
pub(crate) struct FakeCatalog {
    videos: Vec<Video>,
    trending: Vec<Video>,
    channels: Vec<Channel>,
    spaces: Vec<Space>,
    subscriptions: HashMap<String, Vec<Subscription>>,
    history: HashMap<String, Vec<HistoryEntry>>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    pub fn with_trending(mut self, videos: Vec<Video>) -> Self {
        self.trending = videos;
        self
    }

    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.spaces.push(space);
        self
    }

    pub fn with_subscriptions(mut self, user_id: &str, channel_ids: &[&str]) -> Self {
        let subs = channel_ids
            .iter()
            .map(|c| Subscription {
                user_id: user_id.to_string(),
                channel_id: c.to_string(),
            })
            .collect();
        self.subscriptions.insert(user_id.to_string(), subs);
        self
    }

    pub fn with_history(mut self, user_id: &str, videos: Vec<Video>) -> Self {
        let entries = videos
            .into_iter()
            .map(|video| HistoryEntry {
                video,
                watched_at: "2026-01-01T00:00:00Z".to_string(),
            })
            .collect();
        self.history.insert(user_id.to_string(), entries);
        self
    }

    /// Makes `method` answer with HTTP 500.
    pub fn failing(mut self, method: &'static str) -> Self {
        self.failing.insert(method);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    async fn enter(&self, method: &'static str, arg: &str) -> ApiResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(format!("{method}:{arg}"));
        }
        yield_once().await;
        if self.failing.contains(method) {
            Err(ApiError::http(500, "fake failure", "Request failed"))
        } else {
            Ok(())
        }
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::http(404, what, "Request failed")
    }
}

impl CatalogApi for FakeCatalog {
    async fn list_videos(&self, category: Option<&str>) -> ApiResult<Vec<Video>> {
        self.enter("list_videos", category.unwrap_or("*")).await?;
        Ok(self
            .videos
            .iter()
            .filter(|v| category.map_or(true, |c| v.category == c))
            .cloned()
            .collect())
    }

    async fn trending_videos(&self) -> ApiResult<Vec<Video>> {
        self.enter("trending_videos", "").await?;
        Ok(self.trending.clone())
    }

    async fn search_videos(&self, query: &str) -> ApiResult<Vec<Video>> {
        self.enter("search_videos", query).await?;
        let q = query.to_lowercase();
        Ok(self
            .videos
            .iter()
            .filter(|v| v.title.to_lowercase().contains(&q))
            .cloned()
            .collect())
    }

    async fn get_video(&self, id: &str) -> ApiResult<Video> {
        self.enter("get_video", id).await?;
        self.videos
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn videos_by_channels(&self, channel_ids: &[String]) -> ApiResult<Vec<Video>> {
        self.enter("videos_by_channels", &channel_ids.join(",")).await?;
        Ok(self
            .videos
            .iter()
            .filter(|v| channel_ids.contains(&v.channel.id))
            .cloned()
            .collect())
    }

    async fn subscriptions(&self, user_id: &str) -> ApiResult<Vec<Subscription>> {
        self.enter("subscriptions", user_id).await?;
        Ok(self.subscriptions.get(user_id).cloned().unwrap_or_default())
    }

    async fn list_channels(&self) -> ApiResult<Vec<Channel>> {
        self.enter("list_channels", "").await?;
        Ok(self.channels.clone())
    }

    async fn get_channel(&self, id: &str) -> ApiResult<Channel> {
        self.enter("get_channel", id).await?;
        self.channels
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn channel_videos(&self, id: &str) -> ApiResult<Vec<Video>> {
        self.enter("channel_videos", id).await?;
        Ok(self
            .videos
            .iter()
            .filter(|v| v.channel.id == id)
            .cloned()
            .collect())
    }

    async fn list_spaces(&self) -> ApiResult<Vec<Space>> {
        self.enter("list_spaces", "").await?;
        Ok(self.spaces.clone())
    }

    async fn get_space(&self, id: &str) -> ApiResult<Space> {
        self.enter("get_space", id).await?;
        self.spaces
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn history(&self, user_id: &str) -> ApiResult<Vec<HistoryEntry>> {
        self.enter("history", user_id).await?;
        Ok(self.history.get(user_id).cloned().unwrap_or_default())
    }

    async fn watch_later(&self, user_id: &str) -> ApiResult<Vec<WatchLaterEntry>> {
        self.enter("watch_later", user_id).await?;
        Ok(Vec::new())
    }
}
