use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::state::AppContext;
use icons::{Menu, Search};
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopBar(search_ref: NodeRef<html::Input>) -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let navigate = StoredValue::new(use_navigate());

    // Draft text; the store only sees committed searches.
    let draft = RwSignal::new(ui.search_query());
    Effect::new(move |_| draft.set(ui.search_query()));

    let submit = move |raw: String| {
        if let Some(target) = ui.commit_search(&raw) {
            navigate.with_value(|nav| nav(&target, Default::default()));
        }
    };

    view! {
        <header class="sticky top-0 z-20 flex h-14 items-center gap-4 border-b bg-background/95 px-4 backdrop-blur">
            <div class="flex shrink-0 items-center gap-2">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:title="Toggle sidebar"
                    attr:aria-label="Toggle sidebar"
                    on:click=move |_| ui.toggle_sidebar()
                >
                    <Menu />
                </Button>
                <a href="/" class="text-lg font-semibold tracking-tight">"TubeStream"</a>
            </div>

            <form
                role="search"
                class="mx-auto flex w-full max-w-xl items-center"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    submit(draft.get_untracked());
                }
            >
                <Input
                    node_ref=search_ref
                    r#type="search"
                    name="q"
                    placeholder="Search"
                    aria_label="Search"
                    bind_value=draft
                    class="rounded-l-full"
                    on_commit=Callback::new(submit)
                />
                <Button
                    variant=ButtonVariant::Secondary
                    class="h-10 rounded-none rounded-r-full border border-l-0 px-5"
                    attr:aria-label="Search"
                >
                    <Search />
                </Button>
            </form>

            <div class="w-24 shrink-0 text-right text-xs text-muted-foreground">
                <Show when=move || ui.personal_mode()>
                    "Personal"
                </Show>
            </div>
        </header>
    }
}
