use super::{query_view, video_grid};
use crate::api::feeds::SpaceFeed;
use crate::api::queries::{SpaceFeedQuery, SpacesQuery};
use crate::components::cards::SpaceCard;
use crate::components::hooks::use_query;
use crate::components::ui::{CardGrid, EmptyState, GridSkeleton, PageSection, PageTitle, Skeleton};
use crate::models::Space;
use crate::util::{space_gradient, space_icon};
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[component]
pub fn SpacesPage() -> impl IntoView {
    let spaces = use_query(|| Some(SpacesQuery));

    view! {
        <PageSection>
            <PageTitle>"Spaces"</PageTitle>
            <p class="-mt-2 text-sm text-muted-foreground">"Curated groups of channels."</p>
            {query_view(
                spaces,
                || view! { <GridSkeleton count=6 /> }.into_any(),
                || view! { <EmptyState title="No spaces yet" /> }.into_any(),
                |spaces: Vec<Space>| {
                    view! {
                        <CardGrid>
                            {spaces.into_iter().map(|space| view! { <SpaceCard space=space /> }).collect_view()}
                        </CardGrid>
                    }
                        .into_any()
                },
            )}
        </PageSection>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct SpaceRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn SpacePage() -> impl IntoView {
    let params = use_params::<SpaceRouteParams>();
    let space_id = move || {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .filter(|id| !id.trim().is_empty())
    };

    let feed = use_query(move || space_id().map(|id| SpaceFeedQuery { id }));

    view! {
        <PageSection>
            {query_view(
                feed,
                || {
                    view! {
                        <Skeleton class="h-28 w-full rounded-xl" />
                        <GridSkeleton />
                    }
                        .into_any()
                },
                || view! { <EmptyState title="Space not found" action_label="All spaces" action_href="/spaces" /> }.into_any(),
                space_detail,
            )}
        </PageSection>
    }
}

fn space_detail(feed: SpaceFeed) -> AnyView {
    let Some(space) = feed.space else {
        return ().into_any();
    };

    let banner = format!(
        "flex items-center gap-4 rounded-xl bg-gradient-to-br p-6 text-white {}",
        space_gradient(space.color)
    );
    let members = space
        .channels
        .iter()
        .map(|c| {
            let href = format!("/channel/{}", urlencoding::encode(&c.id));
            let avatar = c.avatar_or_placeholder().to_string();
            let name = c.name.clone();
            view! {
                <a href=href class="flex shrink-0 items-center gap-2 rounded-full bg-secondary py-1 pl-1 pr-3 text-sm hover:bg-secondary/70">
                    <img src=avatar alt="" class="size-6 rounded-full object-cover" />
                    {name}
                </a>
            }
        })
        .collect_view();

    let videos = if feed.videos.is_empty() {
        view! { <EmptyState title="No videos in this space yet" /> }.into_any()
    } else {
        video_grid(feed.videos)
    };

    view! {
        <header class=banner>
            <span class="text-5xl">{space_icon(&space.name)}</span>
            <div>
                <PageTitle>{space.name}</PageTitle>
                <div class="text-sm opacity-90">{format!("{} channels · {} videos", space.channels.len(), space.video_count)}</div>
            </div>
        </header>
        <div class="flex gap-2 overflow-x-auto pb-1">{members}</div>
        {videos}
    }
    .into_any()
}
