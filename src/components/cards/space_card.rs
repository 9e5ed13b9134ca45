use crate::models::Space;
use crate::util::{space_gradient, space_icon};
use leptos::prelude::*;

/// Gradient tile; the icon and colors are derived from the space's name and color tag.
#[component]
pub fn SpaceCard(space: Space) -> impl IntoView {
    let href = format!("/spaces/{}", urlencoding::encode(&space.id));
    let tile = format!(
        "flex h-28 items-center justify-center rounded-xl bg-gradient-to-br text-4xl text-white {}",
        space_gradient(space.color)
    );
    let icon = space_icon(&space.name);
    let members = match space.channels.len() {
        1 => "1 channel".to_string(),
        n => format!("{n} channels"),
    };

    view! {
        <a href=href data-name="SpaceCard" class="group flex flex-col gap-2">
            <div class=tile>{icon}</div>
            <div class="text-sm font-medium group-hover:underline">{space.name}</div>
            <div class="text-xs text-muted-foreground">
                {members} " · " {space.video_count} " videos"
            </div>
        </a>
    }
}
