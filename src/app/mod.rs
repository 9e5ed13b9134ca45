use crate::components::hooks::use_ui_prefs;
use crate::components::layout::AppShell;
use crate::config::EnvConfig;
use crate::pages::{
    ChannelPage, ChannelsPage, HistoryPage, HomePage, NotFoundPage, SearchPage, SettingsPage,
    ShortsPage, SpacePage, SpacesPage, SubscriptionsPage, TrendingPage, WatchLaterPage, WatchPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    let app_state = AppState::new(config);
    use_ui_prefs(app_state.ui);
    provide_context(AppContext(app_state));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks (used by the shell) require a <Router> context.
    view! {
        <Router>
            <AppShell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("shorts") view=ShortsPage />
                    <Route path=path!("trending") view=TrendingPage />
                    <Route path=path!("subscriptions") view=SubscriptionsPage />
                    <Route path=path!("search") view=SearchPage />
                    <Route path=path!("watch/:id") view=WatchPage />
                    <Route path=path!("channels") view=ChannelsPage />
                    <Route path=path!("channel/:id") view=ChannelPage />
                    <Route path=path!("spaces") view=SpacesPage />
                    <Route path=path!("spaces/:id") view=SpacePage />
                    <Route path=path!("history") view=HistoryPage />
                    <Route path=path!("watch-later") view=WatchLaterPage />
                    <Route path=path!("settings") view=SettingsPage />
                </Routes>
            </AppShell>
        </Router>
    }
}
