//! Feeds that need more than one request.
//!
//! Each is a two-step pipeline: resolve a set of channel ids, then resolve the
//! videos for that set. The second request is only issued after the first one
//! succeeded, and an empty id set short-circuits to an empty feed.
//!
//! Upstream failures are returned as errors, never flattened into "no data",
//! so a view can tell "you follow nobody" apart from "the lookup failed".

use crate::api::{ApiResult, CatalogApi};
use crate::models::{Space, Video};

/// Channel ids the user subscribes to, in backend order, without duplicates.
pub(crate) async fn subscribed_channel_ids<A: CatalogApi>(
    api: &A,
    user_id: &str,
) -> ApiResult<Vec<String>> {
    let subs = api.subscriptions(user_id).await?;

    let mut ids: Vec<String> = Vec::with_capacity(subs.len());
    for s in subs {
        if !s.channel_id.trim().is_empty() && !ids.contains(&s.channel_id) {
            ids.push(s.channel_id);
        }
    }
    Ok(ids)
}

/// Videos from every channel in `channel_ids`. Empty input issues no request.
pub(crate) async fn videos_for_channels<A: CatalogApi>(
    api: &A,
    channel_ids: &[String],
) -> ApiResult<Vec<Video>> {
    if channel_ids.is_empty() {
        return Ok(Vec::new());
    }
    api.videos_by_channels(channel_ids).await
}

pub(crate) async fn subscription_feed<A: CatalogApi>(
    api: &A,
    user_id: &str,
) -> ApiResult<Vec<Video>> {
    let ids = subscribed_channel_ids(api, user_id).await?;
    if ids.is_empty() {
        log::debug!("subscription feed for {user_id}: no subscriptions");
    }
    videos_for_channels(api, &ids).await
}

#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct SpaceFeed {
    pub space: Option<Space>,
    pub videos: Vec<Video>,
}

impl crate::cache::Emptiable for SpaceFeed {
    fn is_empty_result(&self) -> bool {
        self.space.is_none()
    }
}

/// A space together with the videos of its member channels.
pub(crate) async fn space_feed<A: CatalogApi>(api: &A, space_id: &str) -> ApiResult<SpaceFeed> {
    let space = api.get_space(space_id).await?;
    let videos = videos_for_channels(api, &space.channel_ids()).await?;
    Ok(SpaceFeed {
        space: Some(space),
        videos,
    })
}

/// Same-category videos for the watch page, excluding the one being watched.
pub(crate) async fn related_videos<A: CatalogApi>(
    api: &A,
    video_id: &str,
    category: &str,
) -> ApiResult<Vec<Video>> {
    let category = Some(category).filter(|c| !c.trim().is_empty());
    let mut videos = api.list_videos(category).await?;
    videos.retain(|v| v.id != video_id);
    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{channel, space_with, video, FakeCatalog};
    use crate::api::ApiErrorKind;
    use crate::cache::Emptiable;
    use futures::executor::block_on;

    #[test]
    fn test_subscription_feed_two_steps_in_order() {
        let api = FakeCatalog::default()
            .with_subscriptions("u1", &["c1", "c2"])
            .with_videos(vec![video("v1", "c1", "Music"), video("v2", "c2", "News")]);

        let feed = block_on(subscription_feed(&api, "u1")).expect("feed");

        assert_eq!(
            feed.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            vec!["v1", "v2"]
        );
        assert_eq!(
            api.calls(),
            vec![
                "subscriptions:u1".to_string(),
                "videos_by_channels:c1,c2".to_string()
            ]
        );
    }

    #[test]
    fn test_subscription_feed_short_circuits_on_empty() {
        let api = FakeCatalog::default()
            .with_subscriptions("u1", &[])
            .with_videos(vec![video("v1", "c1", "Music")]);

        let feed = block_on(subscription_feed(&api, "u1")).expect("feed");

        assert!(feed.is_empty());
        assert_eq!(api.calls(), vec!["subscriptions:u1".to_string()]);
    }

    #[test]
    fn test_subscription_lookup_failure_is_an_error() {
        let api = FakeCatalog::default().failing("subscriptions");

        let err = block_on(subscription_feed(&api, "u1")).expect_err("should fail");

        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(api.calls(), vec!["subscriptions:u1".to_string()]);
    }

    #[test]
    fn test_duplicate_subscriptions_collapse() {
        let api = FakeCatalog::default().with_subscriptions("u1", &["c2", "c1", "c2", " "]);
        let ids = block_on(subscribed_channel_ids(&api, "u1")).expect("ids");
        assert_eq!(ids, vec!["c2".to_string(), "c1".to_string()]);
    }

    #[test]
    fn test_space_feed_resolves_member_videos() {
        let api = FakeCatalog::default()
            .with_space(space_with("s1", "Synthwave", vec![channel("c2"), channel("c1")]))
            .with_videos(vec![video("v1", "c1", "Music"), video("v9", "c9", "Music")]);

        let feed = block_on(space_feed(&api, "s1")).expect("feed");

        assert_eq!(feed.space.as_ref().map(|s| s.name.as_str()), Some("Synthwave"));
        assert_eq!(feed.videos.len(), 1);
        assert!(!feed.is_empty_result());
        assert_eq!(
            api.calls(),
            vec!["get_space:s1".to_string(), "videos_by_channels:c2,c1".to_string()]
        );
    }

    #[test]
    fn test_space_without_channels_skips_video_lookup() {
        let api = FakeCatalog::default().with_space(space_with("s1", "Empty", vec![]));

        let feed = block_on(space_feed(&api, "s1")).expect("feed");

        assert!(feed.videos.is_empty());
        assert!(!feed.is_empty_result(), "space itself was found");
        assert_eq!(api.calls(), vec!["get_space:s1".to_string()]);
    }

    #[test]
    fn test_related_videos_excludes_current() {
        let api = FakeCatalog::default().with_videos(vec![
            video("v1", "c1", "Gaming"),
            video("v2", "c1", "Gaming"),
            video("v3", "c2", "News"),
        ]);

        let related = block_on(related_videos(&api, "v1", "Gaming")).expect("related");

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "v2");
        assert_eq!(api.calls(), vec!["list_videos:Gaming".to_string()]);
    }
}
