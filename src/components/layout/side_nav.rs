use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub(crate) struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

const fn item(label: &'static str, href: &'static str, glyph: &'static str) -> NavItem {
    NavItem { label, href, glyph }
}

pub(crate) static BROWSE: [NavItem; 6] = [
    item("Home", "/", "⌂"),
    item("Shorts", "/shorts", "▶"),
    item("Trending", "/trending", "🔥"),
    item("Subscriptions", "/subscriptions", "☰"),
    item("Channels", "/channels", "◎"),
    item("Spaces", "/spaces", "◇"),
];

pub(crate) static LIBRARY: [NavItem; 3] = [
    item("History", "/history", "↺"),
    item("Watch later", "/watch-later", "⏱"),
    item("Settings", "/settings", "⚙"),
];

/// `/` only matches itself; other entries also own their sub-paths.
pub(crate) fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_links(
    items: &'static [NavItem],
    collapsed: impl Fn() -> bool + Copy + Send + Sync + 'static,
    pathname: impl Fn() -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    items
        .iter()
        .map(|it| {
            let class = move || {
                let base = "flex items-center gap-4 rounded-lg px-3 py-2 text-sm transition-colors";
                if is_active(&pathname(), it.href) {
                    format!("{base} bg-accent font-medium text-accent-foreground")
                } else {
                    format!("{base} text-muted-foreground hover:bg-accent/60 hover:text-foreground")
                }
            };
            view! {
                <a href=it.href class=class title=it.label>
                    <span class="w-5 shrink-0 text-center">{it.glyph}</span>
                    <Show when=move || !collapsed()>
                        <span class="truncate">{it.label}</span>
                    </Show>
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn SideNav() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let location = use_location();
    let pathname = move || location.pathname.get();
    let collapsed = move || ui.sidebar_collapsed();

    let width_class = move || {
        if collapsed() {
            "w-16 shrink-0 px-2"
        } else {
            "w-60 shrink-0 px-3"
        }
    };

    view! {
        <nav aria-label="Main" class=move || format!("{} sticky top-14 hidden h-[calc(100vh-3.5rem)] overflow-y-auto py-3 md:block", width_class())>
            <div class="flex flex-col gap-1">{nav_links(&BROWSE, collapsed, pathname)}</div>
            <div class="my-3 h-px w-full bg-border" role="separator" />
            <Show when=move || !collapsed()>
                <div class="px-3 pb-1 text-xs font-medium uppercase text-muted-foreground">
                    {move || if ui.personal_mode() { "You · personal" } else { "You" }}
                </div>
            </Show>
            <div class="flex flex-col gap-1">{nav_links(&LIBRARY, collapsed, pathname)}</div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/shorts", "/"));
        assert!(is_active("/spaces", "/spaces"));
        assert!(is_active("/spaces/s1", "/spaces"));
        assert!(!is_active("/spacesuit", "/spaces"));
        assert!(!is_active("/watch-later", "/watch"));
    }

    #[test]
    fn test_nav_hrefs_are_unique() {
        let mut hrefs: Vec<_> = BROWSE.iter().chain(LIBRARY.iter()).map(|i| i.href).collect();
        let total = hrefs.len();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(hrefs.len(), total);
    }
}
