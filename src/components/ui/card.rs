use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}

    clx! {PageTitle, h1, "text-xl font-semibold tracking-tight"}
    clx! {PageSection, section, "flex flex-col gap-4"}
    clx! {VideoGrid, div, "grid gap-x-4 gap-y-8 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"}
    clx! {ShortsGrid, div, "grid gap-4 grid-cols-2 sm:grid-cols-3 lg:grid-cols-5"}
    clx! {CardGrid, div, "grid gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {Badge, span, "inline-flex items-center rounded px-1.5 py-0.5 text-xs font-medium"}
}

pub use components::*;
