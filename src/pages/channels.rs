use super::{query_view, video_grid};
use crate::api::queries::{ChannelQuery, ChannelVideosQuery, ChannelsQuery};
use crate::components::cards::ChannelCard;
use crate::components::hooks::use_query;
use crate::components::ui::{
    CardGrid, EmptyState, GridSkeleton, PageSection, PageTitle, Skeleton,
};
use crate::models::Channel;
use crate::util::format_subscribers;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[component]
pub fn ChannelsPage() -> impl IntoView {
    let channels = use_query(|| Some(ChannelsQuery));

    view! {
        <PageSection>
            <PageTitle>"Channels"</PageTitle>
            {query_view(
                channels,
                || view! { <GridSkeleton count=6 /> }.into_any(),
                || view! { <EmptyState title="No channels yet" /> }.into_any(),
                |channels: Vec<Channel>| {
                    view! {
                        <CardGrid>
                            {channels
                                .into_iter()
                                .map(|channel| view! { <ChannelCard channel=channel /> })
                                .collect_view()}
                        </CardGrid>
                    }
                        .into_any()
                },
            )}
        </PageSection>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct ChannelRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn ChannelPage() -> impl IntoView {
    let params = use_params::<ChannelRouteParams>();
    let channel_id = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .filter(|id| !id.trim().is_empty())
    };

    let channel = use_query(move || channel_id().map(|id| ChannelQuery { id }));
    let videos = use_query(move || channel_id().map(|id| ChannelVideosQuery { id }));

    view! {
        <PageSection>
            {query_view(
                channel,
                || {
                    view! {
                        <div class="flex items-center gap-4">
                            <Skeleton class="size-20 rounded-full" />
                            <div class="flex flex-col gap-2">
                                <Skeleton class="h-6 w-48" />
                                <Skeleton class="h-4 w-32" />
                            </div>
                        </div>
                    }
                        .into_any()
                },
                || view! { <EmptyState title="Channel not found" action_label="Browse channels" action_href="/channels" /> }.into_any(),
                |channel: Option<Channel>| channel.map(channel_header).into_any(),
            )}

            <h2 class="border-b pb-2 text-sm font-semibold">"Videos"</h2>
            {query_view(
                videos,
                || view! { <GridSkeleton /> }.into_any(),
                || view! { <EmptyState title="This channel hasn't posted any videos" /> }.into_any(),
                video_grid,
            )}
        </PageSection>
    }
}

fn channel_header(channel: Channel) -> impl IntoView {
    let avatar = channel.avatar_or_placeholder().to_string();
    let verified = channel.verified;

    view! {
        <header class="flex items-center gap-5">
            <img src=avatar alt="" class="size-20 rounded-full bg-muted object-cover" />
            <div class="min-w-0">
                <PageTitle class="flex items-center gap-2">
                    {channel.name}
                    <Show when=move || verified>
                        <span class="text-base text-muted-foreground" title="Verified">"✓"</span>
                    </Show>
                </PageTitle>
                <div class="text-sm text-muted-foreground">
                    {channel.handle} " · " {format_subscribers(channel.subscriber_count)}
                </div>
                <p class="mt-1 line-clamp-2 text-sm text-muted-foreground">{channel.description}</p>
            </div>
        </header>
    }
}
