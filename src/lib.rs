mod api;
mod app;
mod cache;
mod components;
mod config;
mod models;
mod pages;
mod state;
mod storage;
mod util;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::from_window();
    _ = console_log::init_with_level(config.log_level);
    log::info!("starting TubeStream web client");

    mount_to_body(move || view! { <App config=config.clone() /> });
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::state::{Theme, UiPrefs};
    use crate::storage::{
        load_json_from_storage, load_ui_prefs, remove_from_storage, save_ui_prefs, UI_PREFS_KEY,
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_ui_prefs_storage_roundtrip() {
        remove_from_storage(UI_PREFS_KEY);
        assert_eq!(load_ui_prefs(), UiPrefs::default());

        let prefs = UiPrefs {
            theme: Theme::Dark,
            sidebar_collapsed: true,
            personal_mode: false,
        };
        save_ui_prefs(&prefs);
        assert_eq!(load_ui_prefs(), prefs);

        remove_from_storage(UI_PREFS_KEY);
        assert!(load_json_from_storage::<UiPrefs>(UI_PREFS_KEY).is_none());
    }

    #[wasm_bindgen_test]
    fn test_corrupt_prefs_fall_back_to_defaults() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("localStorage should be available");
        storage
            .set_item(UI_PREFS_KEY, "{not json")
            .expect("should write raw value");

        assert_eq!(load_ui_prefs(), UiPrefs::default());
        remove_from_storage(UI_PREFS_KEY);
    }

    #[wasm_bindgen_test]
    fn test_config_without_window_env_uses_defaults() {
        let cfg = crate::config::EnvConfig::from_window();
        assert_eq!(cfg.api_url, crate::config::DEFAULT_API_URL);
    }
}

#[cfg(test)]
mod tests {
    use crate::api::feeds::SpaceFeed;
    use crate::models::{Space, Subscription, Video};

    #[test]
    fn test_video_contract_deserialize() {
        // Shape served by GET /api/videos
        let json = r#"[{
            "id": "v1",
            "title": "Morning jazz",
            "thumbnailUrl": "https://img.example/v1.jpg",
            "duration": "12:04",
            "viewCount": 15300,
            "channel": {"id": "c1", "name": "Jazz Cafe", "avatarUrl": null},
            "isLive": false,
            "category": "Music",
            "description": "Smooth."
        }]"#;
        let parsed: Vec<Video> = serde_json::from_str(json).expect("video list should parse");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].channel.name, "Jazz Cafe");
        assert_eq!(parsed[0].view_count, 15_300);
    }

    #[test]
    fn test_live_video_contract_deserialize() {
        let json = r#"{
            "id": "v2",
            "title": "Launch stream",
            "thumbnailUrl": "",
            "duration": "",
            "viewCount": null,
            "channel": {"id": "c2", "name": "Space Desk"},
            "isLive": true,
            "category": "Live"
        }"#;
        let parsed: Video = serde_json::from_str(json).expect("live video should parse");
        assert!(parsed.shows_live_badge());
        assert_eq!(parsed.view_count, 0);
    }

    #[test]
    fn test_subscriptions_contract_deserialize() {
        let json = r#"[{"userId": "u1", "channelId": "c1"}, {"userId": "u1", "channelId": "c2"}]"#;
        let parsed: Vec<Subscription> =
            serde_json::from_str(json).expect("subscriptions should parse");
        assert_eq!(parsed[1].channel_id, "c2");
    }

    #[test]
    fn test_space_contract_deserialize() {
        let json = r#"{
            "id": "s1",
            "name": "Late night music",
            "color": "purple",
            "channels": [{"id": "c1", "name": "Jazz Cafe", "handle": "@jazz"}],
            "videoCount": 42
        }"#;
        let space: Space = serde_json::from_str(json).expect("space should parse");
        assert_eq!(space.channel_ids(), vec!["c1".to_string()]);

        let feed = SpaceFeed {
            space: Some(space),
            videos: vec![],
        };
        assert_eq!(feed.space.map(|s| s.video_count), Some(42));
    }
}
