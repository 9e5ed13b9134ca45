use crate::state::UiStore;
use crate::storage::{apply_dark_class, save_ui_prefs, system_prefers_dark};
use leptos::prelude::*;

/// Mirrors the persisted UI preferences into the page: the resolved theme
/// toggles `dark` on `<html>`, and any change is written back to localStorage.
pub(crate) fn use_ui_prefs(ui: UiStore) {
    Effect::new(move |_| {
        let prefs = ui.prefs();
        apply_dark_class(prefs.theme.is_dark(system_prefers_dark()));
        save_ui_prefs(&prefs);
    });
}
