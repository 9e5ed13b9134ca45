use crate::api::feeds::{self, SpaceFeed};
use crate::api::{ApiResult, CatalogApi};
use crate::cache::QueryKey;
use crate::models::{Channel, HistoryEntry, Space, Video, WatchLaterEntry};

/// A cacheable read: knows its own cache key and how to fetch itself.
///
/// Views never build keys by hand; two equal queries always produce equal keys.
#[allow(async_fn_in_trait)]
pub(crate) trait Query: Clone + PartialEq + Send + Sync + 'static {
    type Output: Clone + Default + Send + Sync + 'static;

    fn key(&self) -> QueryKey;

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output>;
}

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct VideosQuery {
    pub category: Option<String>,
}

impl VideosQuery {
    pub fn category(category: Option<&str>) -> Self {
        Self {
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    pub fn shorts() -> Self {
        Self::category(Some("Shorts"))
    }
}

impl Query for VideosQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/videos").opt_param("category", self.category.as_deref())
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.list_videos(self.category.as_deref()).await
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct TrendingQuery;

impl Query for TrendingQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/videos/trending")
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.trending_videos().await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    /// Blank input is not a search.
    pub fn new(q: &str) -> Option<Self> {
        let q = q.trim();
        (!q.is_empty()).then(|| Self { q: q.to_string() })
    }
}

impl Query for SearchQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/videos/search").param("q", &self.q)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.search_videos(&self.q).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct VideoQuery {
    pub id: String,
}

impl Query for VideoQuery {
    type Output = Option<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/videos/:id").param("id", &self.id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.get_video(&self.id).await.map(Some)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RelatedVideosQuery {
    pub video_id: String,
    pub category: String,
}

impl Query for RelatedVideosQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("related-videos")
            .param("videoId", &self.video_id)
            .param("category", &self.category)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        feeds::related_videos(api, &self.video_id, &self.category).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SubscriptionFeedQuery {
    pub user_id: String,
}

impl Query for SubscriptionFeedQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("subscription-feed").param("userId", &self.user_id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        feeds::subscription_feed(api, &self.user_id).await
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct ChannelsQuery;

impl Query for ChannelsQuery {
    type Output = Vec<Channel>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/channels")
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.list_channels().await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ChannelQuery {
    pub id: String,
}

impl Query for ChannelQuery {
    type Output = Option<Channel>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/channels/:id").param("id", &self.id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.get_channel(&self.id).await.map(Some)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ChannelVideosQuery {
    pub id: String,
}

impl Query for ChannelVideosQuery {
    type Output = Vec<Video>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/channels/:id/videos").param("id", &self.id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.channel_videos(&self.id).await
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct SpacesQuery;

impl Query for SpacesQuery {
    type Output = Vec<Space>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/spaces")
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.list_spaces().await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SpaceFeedQuery {
    pub id: String,
}

impl Query for SpaceFeedQuery {
    type Output = SpaceFeed;

    fn key(&self) -> QueryKey {
        QueryKey::new("space-feed").param("spaceId", &self.id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        feeds::space_feed(api, &self.id).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HistoryQuery {
    pub user_id: String,
}

impl Query for HistoryQuery {
    type Output = Vec<HistoryEntry>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/history/:userId").param("userId", &self.user_id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.history(&self.user_id).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WatchLaterQuery {
    pub user_id: String,
}

impl Query for WatchLaterQuery {
    type Output = Vec<WatchLaterEntry>;

    fn key(&self) -> QueryKey {
        QueryKey::new("/api/watch-later/:userId").param("userId", &self.user_id)
    }

    async fn fetch<A: CatalogApi>(&self, api: &A) -> ApiResult<Self::Output> {
        api.watch_later(&self.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{channel, video, FakeCatalog};
    use crate::cache::{QueryClient, QueryResult, ViewPhase};
    use futures::executor::block_on;
    use futures::future::join;

    fn client() -> QueryClient {
        QueryClient::with_clock(60_000, std::sync::Arc::new(|| 0i64))
    }

    #[test]
    fn test_shorts_empty_result_is_empty_phase() {
        let api = FakeCatalog::default().with_videos(vec![video("v1", "c1", "Music")]);
        let client = client();

        let data = block_on(client.run(&VideosQuery::shorts(), &api)).expect("shorts");
        let result = QueryResult::resolved((*data).clone());

        assert_eq!(result.phase(), ViewPhase::Empty);
        assert_eq!(api.calls(), vec!["list_videos:Shorts".to_string()]);
    }

    #[test]
    fn test_two_views_on_trending_make_one_call() {
        let api = FakeCatalog::default().with_trending(vec![video("t1", "c1", "Music")]);
        let client = client();

        let (a, b) = block_on(join(
            client.run(&TrendingQuery, &api),
            client.run(&TrendingQuery, &api),
        ));

        assert_eq!(api.calls(), vec!["trending_videos:".to_string()]);
        assert_eq!(a.expect("a"), b.expect("b"));
    }

    #[test]
    fn test_subscription_feed_through_cache() {
        let api = FakeCatalog::default()
            .with_subscriptions("u1", &["c1", "c2"])
            .with_videos(vec![video("v2", "c2", "News"), video("v1", "c1", "News")]);
        let client = client();
        let q = SubscriptionFeedQuery {
            user_id: "u1".to_string(),
        };

        let feed = block_on(client.run(&q, &api)).expect("feed");
        assert_eq!(
            feed.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            vec!["v2", "v1"]
        );

        // Second read is served from the cache.
        block_on(client.run(&q, &api)).expect("cached");
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_subscription_lookup_failure_stays_distinct_from_empty() {
        let api = FakeCatalog::default().failing("subscriptions");
        let client = client();
        let q = SubscriptionFeedQuery {
            user_id: "u1".to_string(),
        };

        let err = block_on(client.run(&q, &api)).expect_err("should fail");
        let result = QueryResult::<Vec<Video>>::failed(err);
        assert_eq!(result.phase(), ViewPhase::Errored);
    }

    #[test]
    fn test_category_queries_are_distinct_keys() {
        assert_eq!(VideosQuery::category(None).key(), QueryKey::new("/api/videos"));
        assert_eq!(VideosQuery::category(Some("  ")).key(), QueryKey::new("/api/videos"));
        assert_ne!(VideosQuery::shorts().key(), VideosQuery::category(None).key());
    }

    #[test]
    fn test_search_query_rejects_blank() {
        assert!(SearchQuery::new("   ").is_none());
        let q = SearchQuery::new("  lofi beats ").expect("query");
        assert_eq!(q.key().get("q"), Some("lofi beats"));
    }

    #[test]
    fn test_id_queries_share_endpoint_per_resource() {
        let a = ChannelQuery { id: "c1".into() }.key();
        let b = ChannelQuery { id: "c2".into() }.key();
        assert_eq!(a.endpoint(), b.endpoint());
        assert_ne!(a, b);
        assert_ne!(a, ChannelVideosQuery { id: "c1".into() }.key());
    }

    #[test]
    fn test_missing_video_is_error_not_empty() {
        let api = FakeCatalog::default();
        let err = block_on(VideoQuery { id: "nope".into() }.fetch(&api)).expect_err("404");
        assert_eq!(err.kind, crate::api::ApiErrorKind::Http);
    }

    #[test]
    fn test_channel_and_history_queries() {
        let api = FakeCatalog::default()
            .with_channels(vec![channel("c1"), channel("c2")])
            .with_videos(vec![video("v1", "c1", "Music"), video("v2", "c2", "Music")])
            .with_history("u1", vec![video("v2", "c2", "Music")]);

        let found = block_on(ChannelQuery { id: "c2".into() }.fetch(&api)).expect("channel");
        assert_eq!(found.map(|c| c.handle), Some("@c2".to_string()));

        let vids = block_on(ChannelVideosQuery { id: "c1".into() }.fetch(&api)).expect("videos");
        assert_eq!(vids.len(), 1);

        let history = block_on(HistoryQuery { user_id: "u1".into() }.fetch(&api)).expect("h");
        assert_eq!(history[0].video.id, "v2");

        let later = block_on(WatchLaterQuery { user_id: "u1".into() }.fetch(&api)).expect("wl");
        assert!(later.is_empty());
    }
}
