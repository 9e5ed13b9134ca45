use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageSection, PageTitle,
};
use crate::config::DEFAULT_USER_ID;
use crate::state::{AppContext, Theme};
use leptos::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let ui = app_state.0.ui;
    let queries = StoredValue::new(app_state.0.queries.clone());
    let api_url = app_state.0.config.api_url.clone();

    let cached_entries = app_state.0.cache_size;

    let theme_options = move || {
        let current = ui.theme();
        Theme::iter()
            .map(|theme| {
                let variant = if theme == current {
                    ButtonVariant::ChipActive
                } else {
                    ButtonVariant::Chip
                };
                view! {
                    <Button
                        variant=variant
                        size=ButtonSize::Chip
                        attr:aria-pressed=move || (ui.theme() == theme).to_string()
                        on:click=move |_| ui.set_theme(theme)
                    >
                        {theme.label()}
                    </Button>
                }
            })
            .collect_view()
    };

    view! {
        <PageSection class="max-w-2xl">
            <PageTitle>"Settings"</PageTitle>

            <Card>
                <CardHeader>
                    <CardTitle>"Appearance"</CardTitle>
                    <CardDescription>"Device theme follows your system's light or dark setting."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-wrap gap-2">{theme_options}</CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Personal mode"</CardTitle>
                    <CardDescription>"Show only videos from your subscriptions on the home page."</CardDescription>
                </CardHeader>
                <CardContent>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        attr:role="switch"
                        attr:aria-checked=move || ui.personal_mode().to_string()
                        on:click=move |_| ui.toggle_personal_mode()
                    >
                        {move || if ui.personal_mode() { "On" } else { "Off" }}
                    </Button>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Account"</CardTitle>
                    <CardDescription>"All requests are made as this user."</CardDescription>
                </CardHeader>
                <CardContent class="flex items-center justify-between gap-4">
                    <code class="truncate rounded bg-muted px-2 py-1 text-xs">{move || ui.user_id()}</code>
                    <Show when=move || ui.user_id() != DEFAULT_USER_ID>
                        <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=move |_| ui.reset_user()>
                            "Reset"
                        </Button>
                    </Show>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Data"</CardTitle>
                    <CardDescription>{format!("Backend: {api_url}")}</CardDescription>
                </CardHeader>
                <CardContent class="flex items-center justify-between gap-4">
                    <span class="text-sm text-muted-foreground">
                        {move || format!("{} cached requests", cached_entries.get())}
                    </span>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=move |_| queries.with_value(|q| q.clear())
                    >
                        "Clear cache"
                    </Button>
                </CardContent>
            </Card>
        </PageSection>
    }
}
