use super::query_view;
use crate::api::queries::{RelatedVideosQuery, VideoQuery};
use crate::components::cards::VideoCard;
use crate::components::hooks::use_query;
use crate::components::ui::{Badge, EmptyState, Skeleton, VideoCardSkeleton};
use crate::models::Video;
use crate::util::format_views;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct WatchRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn WatchPage() -> impl IntoView {
    let params = use_params::<WatchRouteParams>();

    // Use closures so params access happens inside a reactive tracking context.
    let video_id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    let video = use_query(move || {
        let id = video_id();
        (!id.trim().is_empty()).then_some(VideoQuery { id })
    });

    // Runs once the video itself has resolved.
    let related = use_query(move || {
        video.get().data.map(|v| RelatedVideosQuery {
            video_id: v.id,
            category: v.category,
        })
    });

    view! {
        <div class="flex flex-col gap-8 lg:flex-row">
            <div class="min-w-0 flex-1">
                {query_view(
                    video,
                    || {
                        view! {
                            <div class="flex flex-col gap-4">
                                <Skeleton class="aspect-video w-full rounded-xl" />
                                <Skeleton class="h-6 w-2/3" />
                                <Skeleton class="h-4 w-1/3" />
                            </div>
                        }
                            .into_any()
                    },
                    || view! { <EmptyState title="Video not found" action_label="Go to home" action_href="/" /> }.into_any(),
                    |v: Option<Video>| v.map(player).into_any(),
                )}
            </div>

            <aside class="flex w-full flex-col gap-4 lg:w-96">
                <Show when=move || video.get().data.is_some()>
                    <h2 class="text-sm font-semibold">"Related"</h2>
                    {query_view(
                        related,
                        || (0..4).map(|_| view! { <VideoCardSkeleton /> }).collect_view().into_any(),
                        || view! { <p class="text-sm text-muted-foreground">"No related videos."</p> }.into_any(),
                        |videos: Vec<Video>| {
                            videos
                                .into_iter()
                                .map(|video| view! { <VideoCard video=video /> })
                                .collect_view()
                                .into_any()
                        },
                    )}
                </Show>
            </aside>
        </div>
    }
}

fn player(video: Video) -> impl IntoView {
    let channel_href = format!("/channel/{}", urlencoding::encode(&video.channel.id));
    let avatar = video.channel.avatar_or_placeholder().to_string();
    let live = video.shows_live_badge();

    view! {
        <article class="flex flex-col gap-4">
            <div class="relative aspect-video overflow-hidden rounded-xl bg-black">
                <img src=video.thumbnail_url alt=video.title.clone() class="h-full w-full object-contain" />
                <Show when=move || live>
                    <Badge class="absolute left-3 top-3 bg-red-600 text-white">"LIVE"</Badge>
                </Show>
            </div>
            <h1 class="text-xl font-semibold">{video.title}</h1>
            <div class="flex items-center gap-3">
                <a href=channel_href class="flex items-center gap-3">
                    <img src=avatar alt="" class="size-10 rounded-full bg-muted object-cover" />
                    <span class="font-medium">{video.channel.name}</span>
                </a>
            </div>
            <div class="rounded-xl bg-muted/60 p-3 text-sm">
                <div class="font-medium">
                    {format_views(video.view_count)}
                    {(!video.category.is_empty()).then(|| format!(" · {}", video.category))}
                </div>
                <p class="mt-2 whitespace-pre-line text-muted-foreground">{video.description}</p>
            </div>
        </article>
    }
}
