use crate::api::ApiClient;
use crate::cache::QueryClient;
use crate::config::{EnvConfig, DEFAULT_USER_ID};
use leptos::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Theme {
    Light,
    Dark,
    #[default]
    Device,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_str(&s.trim().to_lowercase()).ok()
    }

    /// `Device` defers to the browser's color-scheme preference.
    pub fn is_dark(self, prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::Device => prefers_dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Device => "Use device theme",
        }
    }
}

// An unknown stored value must not discard the rest of the prefs.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// The slice of UI state that survives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UiPrefs {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub personal_mode: bool,
}

/// Process-wide UI state. Every field is a signal, so a read inside a reactive
/// scope re-runs when the field changes; setters take effect immediately.
#[derive(Clone, Copy)]
pub(crate) struct UiStore {
    user_id: RwSignal<String>,
    theme: RwSignal<Theme>,
    search_query: RwSignal<String>,
    sidebar_collapsed: RwSignal<bool>,
    personal_mode: RwSignal<bool>,
}

impl UiStore {
    pub fn with_prefs(prefs: UiPrefs) -> Self {
        Self {
            user_id: RwSignal::new(DEFAULT_USER_ID.to_string()),
            theme: RwSignal::new(prefs.theme),
            search_query: RwSignal::new(String::new()),
            sidebar_collapsed: RwSignal::new(prefs.sidebar_collapsed),
            personal_mode: RwSignal::new(prefs.personal_mode),
        }
    }

    /// Restores persisted preferences from localStorage.
    pub fn restore() -> Self {
        Self::with_prefs(crate::storage::load_ui_prefs())
    }

    pub fn user_id(&self) -> String {
        self.user_id.get()
    }

    pub fn set_user_id(&self, id: impl Into<String>) {
        self.user_id.set(id.into());
    }

    pub fn reset_user(&self) {
        self.set_user_id(DEFAULT_USER_ID);
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn search_query(&self) -> String {
        self.search_query.get()
    }

    pub fn set_search_query(&self, q: impl Into<String>) {
        self.search_query.set(q.into());
    }

    /// Stores the trimmed query and returns where the results live.
    /// Blank input keeps the user where they are.
    pub fn commit_search(&self, raw: &str) -> Option<String> {
        let q = raw.trim();
        self.search_query.set(q.to_string());
        if q.is_empty() {
            return None;
        }
        Some(format!("/search?q={}", urlencoding::encode(q)))
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed.get()
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.sidebar_collapsed.set(collapsed);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|c| *c = !*c);
    }

    pub fn personal_mode(&self) -> bool {
        self.personal_mode.get()
    }

    pub fn set_personal_mode(&self, on: bool) {
        self.personal_mode.set(on);
    }

    pub fn toggle_personal_mode(&self) {
        self.personal_mode.update(|p| *p = !*p);
    }

    /// Tracked snapshot of the persisted fields.
    pub fn prefs(&self) -> UiPrefs {
        UiPrefs {
            theme: self.theme.get(),
            sidebar_collapsed: self.sidebar_collapsed.get(),
            personal_mode: self.personal_mode.get(),
        }
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::with_prefs(UiPrefs::default())
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: EnvConfig,
    pub ui: UiStore,
    pub api_client: StoredValue<ApiClient>,

    /// Shared request cache; every data view reads through it.
    pub queries: QueryClient,

    /// Number of cached entries, kept current by the cache itself.
    pub cache_size: RwSignal<usize>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        let api_client = ApiClient::from_config(&config);
        log::info!("using backend {}", api_client.base_url);

        let queries = QueryClient::new(config.cache_gc_ms);
        let cache_size = RwSignal::new(queries.len());
        queries.on_size_change(move |n| {
            let _ = cache_size.try_set(n);
        });

        Self {
            ui: UiStore::restore(),
            api_client: StoredValue::new(api_client),
            queries,
            cache_size,
            config,
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
