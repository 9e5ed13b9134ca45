mod side_nav;
mod top_bar;

pub use side_nav::*;
pub use top_bar::*;

use crate::state::AppContext;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen::JsCast;

/// Top bar and side navigation around the active page.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let search_ref: NodeRef<html::Input> = NodeRef::new();

    // Keyboard shortcuts:
    // - Cmd/Ctrl+B: toggle sidebar
    // - Cmd/Ctrl+K or "/": focus search
    // - Esc: blur search
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let is_meta = ev.meta_key() || ev.ctrl_key();
        let key = ev.key().to_lowercase();

        let typing = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| matches!(el.tag_name().to_lowercase().as_str(), "input" | "textarea"))
            .unwrap_or(false);

        if key == "escape" {
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.blur();
            }
            return;
        }
        if typing {
            return;
        }

        if is_meta && key == "b" {
            ev.prevent_default();
            ui.toggle_sidebar();
        } else if (is_meta && key == "k") || (!is_meta && key == "/") {
            ev.prevent_default();
            if let Some(input) = search_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <TopBar search_ref=search_ref />
            <div class="flex">
                <SideNav />
                <main class="min-w-0 flex-1 px-4 py-6 md:px-8">{children()}</main>
            </div>
        </div>
    }
}
