mod channels;
mod feeds;
mod settings;
mod spaces;
mod watch;

pub use channels::*;
pub use feeds::*;
pub use settings::*;
pub use spaces::*;
pub use watch::*;

use crate::api::ApiError;
use crate::cache::{Emptiable, ViewPhase};
use crate::components::cards::VideoCard;
use crate::components::hooks::UseQuery;
use crate::components::ui::{ErrorState, PageTitle, ShortsGrid, VideoGrid};
use crate::models::Video;
use leptos::prelude::*;

/// Renders a query through its phases: loading skeleton, error panel with retry,
/// empty call-to-action, or the populated view.
pub(crate) fn query_view<T>(
    query: UseQuery<T>,
    loading: impl Fn() -> AnyView + Send + Sync + 'static,
    empty: impl Fn() -> AnyView + Send + Sync + 'static,
    populated: impl Fn(T) -> AnyView + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Emptiable + Send + Sync + 'static,
{
    move || {
        let result = query.get();
        match result.phase() {
            ViewPhase::Loading => loading(),
            ViewPhase::Errored => {
                let error = result.error.unwrap_or_else(ApiError::cancelled);
                view! { <ErrorState error=error on_retry=Callback::new(move |_| query.retry()) /> }
                    .into_any()
            }
            ViewPhase::Empty => empty(),
            ViewPhase::Populated => populated(result.data),
        }
    }
}

pub(crate) fn video_grid(videos: Vec<Video>) -> AnyView {
    view! {
        <VideoGrid>
            {videos.into_iter().map(|video| view! { <VideoCard video=video /> }).collect_view()}
        </VideoGrid>
    }
    .into_any()
}

pub(crate) fn shorts_grid(videos: Vec<Video>) -> AnyView {
    view! {
        <ShortsGrid>
            {videos
                .into_iter()
                .map(|video| view! { <VideoCard video=video vertical=true /> })
                .collect_view()}
        </ShortsGrid>
    }
    .into_any()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 py-24 text-center">
            <PageTitle>"This page isn't available"</PageTitle>
            <p class="text-sm text-muted-foreground">"The link may be broken, or the page may have been removed."</p>
            <a href="/" class="text-sm font-medium text-primary underline-offset-4 hover:underline">"Go to home"</a>
        </div>
    }
}
