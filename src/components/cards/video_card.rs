use crate::components::ui::Badge;
use crate::models::Video;
use crate::util::format_views;
use leptos::prelude::*;

/// Thumbnail, duration or LIVE badge, channel avatar and name, view count.
///
/// Everything comes from the video's embedded channel summary; the card never
/// looks the channel up.
#[component]
pub fn VideoCard(video: Video, #[prop(optional)] vertical: bool) -> impl IntoView {
    let watch_href = format!("/watch/{}", urlencoding::encode(&video.id));
    let channel_href = format!("/channel/{}", urlencoding::encode(&video.channel.id));
    let channel_link = channel_href.clone();
    let avatar = video.channel.avatar_or_placeholder().to_string();
    let views = format_views(video.view_count);

    let corner = if video.shows_live_badge() {
        view! { <Badge class="bg-red-600 text-white">"LIVE"</Badge> }.into_any()
    } else if let Some(duration) = video.duration_label() {
        let duration = duration.to_string();
        view! { <Badge class="bg-black/80 text-white">{duration}</Badge> }.into_any()
    } else {
        ().into_any()
    };

    let thumb_class = if vertical {
        "relative block aspect-[9/16] overflow-hidden rounded-xl bg-muted"
    } else {
        "relative block aspect-video overflow-hidden rounded-xl bg-muted"
    };

    view! {
        <article data-name="VideoCard" class="flex flex-col gap-3">
            <a href=watch_href.clone() class=thumb_class>
                <img
                    src=video.thumbnail_url
                    alt=video.title.clone()
                    loading="lazy"
                    class="h-full w-full object-cover transition-transform hover:scale-105"
                />
                <div class="absolute bottom-1.5 right-1.5">{corner}</div>
            </a>

            <div class="flex gap-3">
                <Show when=move || !vertical>
                    <a href=channel_href.clone() class="shrink-0">
                        <img src=avatar.clone() alt="" class="size-9 rounded-full bg-muted object-cover" />
                    </a>
                </Show>
                <div class="min-w-0 flex-1">
                    <a href=watch_href>
                        <h3 class="line-clamp-2 text-sm font-medium leading-snug">{video.title}</h3>
                    </a>
                    <a
                        href=channel_link
                        class="mt-1 block truncate text-xs text-muted-foreground hover:text-foreground"
                    >
                        {video.channel.name}
                    </a>
                    <div class="text-xs text-muted-foreground">{views}</div>
                </div>
            </div>
        </article>
    }
}
