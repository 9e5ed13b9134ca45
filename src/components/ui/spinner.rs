use icons::LoaderCircle;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <LoaderCircle class=merged_class attr:role="status" attr:aria-label="Loading" /> }
}

#[component]
pub fn Skeleton(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("animate-pulse rounded-md bg-muted", class);

    view! { <div data-name="Skeleton" class=merged_class aria-hidden="true" /> }
}

/// Placeholder shaped like a video card.
#[component]
pub fn VideoCardSkeleton(#[prop(optional)] vertical: bool) -> impl IntoView {
    let thumb = if vertical { "aspect-[9/16] w-full rounded-xl" } else { "aspect-video w-full rounded-xl" };

    view! {
        <div class="flex flex-col gap-3">
            <Skeleton class=thumb />
            <div class="flex gap-3">
                <Skeleton class="size-9 shrink-0 rounded-full" />
                <div class="flex flex-1 flex-col gap-2">
                    <Skeleton class="h-4 w-full" />
                    <Skeleton class="h-3 w-2/3" />
                </div>
            </div>
        </div>
    }
}

/// A grid of `count` card placeholders.
#[component]
pub fn GridSkeleton(
    #[prop(default = 8)] count: usize,
    #[prop(optional)] vertical: bool,
) -> impl IntoView {
    let class = if vertical {
        "grid gap-4 grid-cols-2 sm:grid-cols-3 lg:grid-cols-5"
    } else {
        "grid gap-x-4 gap-y-8 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"
    };

    view! {
        <div class=class role="status" aria-label="Loading">
            {(0..count).map(|_| view! { <VideoCardSkeleton vertical=vertical /> }).collect_view()}
        </div>
    }
}
