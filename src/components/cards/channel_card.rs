use crate::components::ui::Card;
use crate::models::Channel;
use crate::util::format_subscribers;
use leptos::prelude::*;

#[component]
pub fn ChannelCard(channel: Channel) -> impl IntoView {
    let href = format!("/channel/{}", urlencoding::encode(&channel.id));
    let avatar = channel.avatar_or_placeholder().to_string();
    let verified = channel.verified;

    view! {
        <a href=href data-name="ChannelCard">
            <Card class="items-center gap-2 px-4 py-5 text-center transition-colors hover:bg-accent/40">
                <img src=avatar alt="" class="size-20 rounded-full bg-muted object-cover" />
                <div class="flex items-center gap-1 text-sm font-medium">
                    <span class="truncate">{channel.name}</span>
                    <Show when=move || verified>
                        <span class="text-muted-foreground" title="Verified">"✓"</span>
                    </Show>
                </div>
                <div class="text-xs text-muted-foreground">{channel.handle}</div>
                <div class="text-xs text-muted-foreground">{format_subscribers(channel.subscriber_count)}</div>
            </Card>
        </a>
    }
}
