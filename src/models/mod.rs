use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Placeholder used wherever a channel has no avatar of its own.
pub(crate) const AVATAR_PLACEHOLDER: &str = "/assets/avatar-placeholder.svg";

/// Backend sends `null` for counters that were never populated.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Denormalized channel info embedded in every video payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ChannelSummary {
    pub fn avatar_or_placeholder(&self) -> &str {
        avatar_or_placeholder(self.avatar_url.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,

    /// `mm:ss` / `h:mm:ss`. Empty for live streams.
    #[serde(default)]
    pub duration: String,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub view_count: u64,

    pub channel: ChannelSummary,

    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Video {
    pub fn shows_live_badge(&self) -> bool {
        self.is_live
    }

    /// Duration to overlay on the thumbnail; none for live streams or when unknown.
    pub fn duration_label(&self) -> Option<&str> {
        let duration = self.duration.trim();
        (!self.is_live && !duration.is_empty()).then_some(duration)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub subscriber_count: u64,
    #[serde(default)]
    pub description: String,
}

impl Channel {
    pub fn avatar_or_placeholder(&self) -> &str {
        avatar_or_placeholder(self.avatar_url.as_deref())
    }
}

pub(crate) fn avatar_or_placeholder(url: Option<&str>) -> &str {
    match url {
        Some(u) if !u.trim().is_empty() => u,
        _ => AVATAR_PLACEHOLDER,
    }
}

/// Color tag of a space. Unknown tags fall back to `Blue`.
#[derive(
    Serialize, Clone, Copy, Debug, PartialEq, Eq, Default, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SpaceColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
    Teal,
}

impl<'de> Deserialize<'de> for SpaceColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw.trim().to_lowercase().parse().unwrap_or_default())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: SpaceColor,

    /// Display order is the order returned by the backend.
    #[serde(default)]
    pub channels: Vec<Channel>,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub video_count: u64,
}

impl Space {
    pub fn channel_ids(&self) -> Vec<String> {
        self.channels.iter().map(|c| c.id.clone()).collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Subscription {
    pub user_id: String,
    pub channel_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryEntry {
    pub video: Video,
    #[serde(default)]
    pub watched_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WatchLaterEntry {
    pub video: Video,
    #[serde(default)]
    pub added_at: String,
}

/// Home feed chips. `All` sends no category filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, AsRefStr, EnumIter)]
pub(crate) enum Category {
    #[default]
    All,
    Music,
    Gaming,
    News,
    Live,
    Sports,
    Learning,
    Shorts,
}

impl Category {
    pub fn as_filter(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Music => Some("Music"),
            Self::Gaming => Some("Gaming"),
            Self::News => Some("News"),
            Self::Live => Some("Live"),
            Self::Sports => Some("Sports"),
            Self::Learning => Some("Learning"),
            Self::Shorts => Some("Shorts"),
        }
    }
}
