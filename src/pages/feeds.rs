use super::{query_view, shorts_grid, video_grid};
use crate::api::queries::{
    HistoryQuery, SearchQuery, SubscriptionFeedQuery, TrendingQuery, VideosQuery, WatchLaterQuery,
};
use crate::components::cards::VideoCard;
use crate::components::hooks::use_query;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, EmptyState, GridSkeleton, PageSection, PageTitle, Spinner,
    VideoGrid,
};
use crate::models::{Category, HistoryEntry, Video, WatchLaterEntry};
use crate::state::AppContext;
use crate::util::format_views;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use strum::IntoEnumIterator;

pub(crate) const SHORTS_EMPTY: &str = "No shorts available yet";

fn skeleton() -> AnyView {
    view! { <GridSkeleton /> }.into_any()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let category = RwSignal::new(Category::All);

    let feed = use_query(move || {
        (!ui.personal_mode()).then(|| VideosQuery::category(category.get().as_filter()))
    });
    let personal_feed = use_query(move || {
        ui.personal_mode().then(|| SubscriptionFeedQuery {
            user_id: ui.user_id(),
        })
    });

    let chips = move || {
        let selected = category.get();
        Category::iter()
            .map(|c| {
                let variant = if c == selected {
                    ButtonVariant::ChipActive
                } else {
                    ButtonVariant::Chip
                };
                view! {
                    <Button variant=variant size=ButtonSize::Chip on:click=move |_| category.set(c)>
                        {c.to_string()}
                    </Button>
                }
            })
            .collect_view()
    };

    view! {
        <PageSection>
            <Show
                when=move || ui.personal_mode()
                fallback=move || {
                    view! {
                        <div class="flex gap-3 overflow-x-auto pb-1">{chips}</div>
                        {query_view(
                            feed,
                            skeleton,
                            || {
                                view! {
                                    <EmptyState
                                        title="No videos in this category yet"
                                        hint="Try another category."
                                    />
                                }
                                    .into_any()
                            },
                            video_grid,
                        )}
                    }
                }
            >
                <p class="text-sm text-muted-foreground">"Personal mode: videos from your subscriptions."</p>
                {query_view(
                    personal_feed,
                    skeleton,
                    || {
                        view! {
                            <EmptyState
                                title="Nothing here yet"
                                hint="Subscribe to channels to fill your personal feed."
                                action_label="Browse channels"
                                action_href="/channels"
                            />
                        }
                            .into_any()
                    },
                    video_grid,
                )}
            </Show>
        </PageSection>
    }
}

#[component]
pub fn ShortsPage() -> impl IntoView {
    let shorts = use_query(|| Some(VideosQuery::shorts()));

    view! {
        <PageSection>
            <PageTitle>"Shorts"</PageTitle>
            {query_view(
                shorts,
                || view! { <GridSkeleton count=10 vertical=true /> }.into_any(),
                || view! { <EmptyState title=SHORTS_EMPTY /> }.into_any(),
                shorts_grid,
            )}
        </PageSection>
    }
}

#[component]
pub fn TrendingPage() -> impl IntoView {
    let trending = use_query(|| Some(TrendingQuery));

    view! {
        <PageSection>
            <PageTitle>"Trending"</PageTitle>
            {query_view(
                trending,
                skeleton,
                || view! { <EmptyState title="Nothing is trending right now" /> }.into_any(),
                |videos: Vec<Video>| {
                    view! {
                        <ol class="flex flex-col gap-4">
                            {videos
                                .into_iter()
                                .enumerate()
                                .map(|(i, video)| trending_row(i + 1, video))
                                .collect_view()}
                        </ol>
                    }
                        .into_any()
                },
            )}
        </PageSection>
    }
}

fn trending_row(rank: usize, video: Video) -> impl IntoView {
    let href = format!("/watch/{}", urlencoding::encode(&video.id));

    view! {
        <li class="flex gap-4">
            <span class="w-6 shrink-0 pt-2 text-right text-sm font-semibold text-muted-foreground">{rank}</span>
            <a href=href class="flex min-w-0 flex-1 gap-4">
                <img src=video.thumbnail_url alt="" class="aspect-video w-60 shrink-0 rounded-xl bg-muted object-cover" />
                <div class="min-w-0">
                    <h3 class="line-clamp-2 font-medium">{video.title}</h3>
                    <div class="mt-1 text-xs text-muted-foreground">
                        {video.channel.name} " · " {format_views(video.view_count)}
                    </div>
                    <p class="mt-2 line-clamp-2 text-xs text-muted-foreground">{video.description}</p>
                </div>
            </a>
        </li>
    }
}

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let feed = use_query(move || {
        Some(SubscriptionFeedQuery {
            user_id: ui.user_id(),
        })
    });

    view! {
        <PageSection>
            <PageTitle>"Subscriptions"</PageTitle>
            {query_view(
                feed,
                skeleton,
                || {
                    view! {
                        <EmptyState
                            title="No videos from your subscriptions"
                            hint="Channels you subscribe to will show up here."
                            action_label="Browse channels"
                            action_href="/channels"
                        />
                    }
                        .into_any()
                },
                video_grid,
            )}
        </PageSection>
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let query = use_query_map();
    let q = move || query.get().get("q").unwrap_or_default();

    // Keep the top bar in sync when the page is opened from a link.
    Effect::new(move |_| {
        let q = q();
        if q.trim() != ui.search_query().trim() {
            ui.set_search_query(q.trim());
        }
    });

    let results = use_query(move || SearchQuery::new(&q()));

    view! {
        <PageSection>
            <Show
                when=move || !q().trim().is_empty()
                fallback=|| view! { <EmptyState title="Search for videos" hint="Type in the search box and press Enter." /> }
            >
                <PageTitle>{move || format!("Results for \"{}\"", q().trim())}</PageTitle>
                {query_view(
                    results,
                    skeleton,
                    || {
                        view! {
                            <EmptyState
                                title="No results found"
                                hint="Try different keywords or remove search filters."
                            />
                        }
                            .into_any()
                    },
                    video_grid,
                )}
            </Show>
        </PageSection>
    }
}

fn date_part(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or_default().to_string()
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let history = use_query(move || {
        Some(HistoryQuery {
            user_id: ui.user_id(),
        })
    });

    view! {
        <PageSection>
            <div class="flex items-center justify-between">
                <PageTitle>"Watch history"</PageTitle>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:disabled=move || history.get().is_loading
                    on:click=move |_| history.retry()
                >
                    <Show when=move || history.get().is_loading>
                        <Spinner class="mr-1" />
                    </Show>
                    "Refresh"
                </Button>
            </div>
            {query_view(
                history,
                skeleton,
                || {
                    view! {
                        <EmptyState
                            title="No watch history yet"
                            hint="Videos you watch will appear here."
                            action_label="Explore trending"
                            action_href="/trending"
                        />
                    }
                        .into_any()
                },
                |entries: Vec<HistoryEntry>| {
                    view! {
                        <VideoGrid>
                            {entries
                                .into_iter()
                                .map(|e| dated_card(e.video, format!("Watched {}", date_part(&e.watched_at))))
                                .collect_view()}
                        </VideoGrid>
                    }
                        .into_any()
                },
            )}
        </PageSection>
    }
}

#[component]
pub fn WatchLaterPage() -> impl IntoView {
    let ui = expect_context::<AppContext>().0.ui;
    let saved = use_query(move || {
        Some(WatchLaterQuery {
            user_id: ui.user_id(),
        })
    });

    view! {
        <PageSection>
            <PageTitle>"Watch later"</PageTitle>
            {query_view(
                saved,
                skeleton,
                || {
                    view! {
                        <EmptyState
                            title="Your watch later list is empty"
                            hint="Save videos to watch them later."
                        />
                    }
                        .into_any()
                },
                |entries: Vec<WatchLaterEntry>| {
                    view! {
                        <VideoGrid>
                            {entries
                                .into_iter()
                                .map(|e| dated_card(e.video, format!("Added {}", date_part(&e.added_at))))
                                .collect_view()}
                        </VideoGrid>
                    }
                        .into_any()
                },
            )}
        </PageSection>
    }
}

fn dated_card(video: Video, caption: String) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1">
            <VideoCard video=video />
            <span class="pl-12 text-xs text-muted-foreground">{caption}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2026-01-01T10:00:00Z"), "2026-01-01");
        assert_eq!(date_part("yesterday"), "yesterday");
        assert_eq!(date_part(""), "");
    }
}
