use crate::api::{ApiError, ApiErrorKind};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "flex w-full flex-col items-center gap-3 rounded-xl border px-6 py-10 text-center text-sm"}
    clx! {AlertTitle, h3, "font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "max-w-md text-sm text-muted-foreground [&_p]:leading-relaxed"}
}

pub use components::*;

/// Successful response with nothing in it.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] hint: String,
    #[prop(into, optional)] action_label: Option<String>,
    #[prop(into, optional)] action_href: Option<String>,
) -> impl IntoView {
    let action = action_label.zip(action_href).map(|(label, href)| {
        view! {
            <a
                href=href
                class="inline-flex h-8 items-center rounded-full bg-secondary px-4 text-sm font-medium text-secondary-foreground hover:bg-secondary/80"
            >
                {label}
            </a>
        }
    });
    let hint = (!hint.is_empty()).then(|| view! { <AlertDescription>{hint}</AlertDescription> });

    view! {
        <Alert attr:data-state="empty" class="border-dashed">
            <AlertTitle>{title}</AlertTitle>
            {hint}
            {action}
        </Alert>
    }
}

/// Heading shown for each failure category.
pub(crate) fn error_title(kind: &ApiErrorKind) -> &'static str {
    match kind {
        ApiErrorKind::Network => "Can't reach the server",
        ApiErrorKind::Timeout => "The server took too long to respond",
        ApiErrorKind::Http => "Something went wrong",
        ApiErrorKind::Parse => "Received an unexpected response",
        ApiErrorKind::Cancelled => "Request cancelled",
    }
}

/// Failed request. Never rendered for an empty-but-valid result.
#[component]
pub fn ErrorState(error: ApiError, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    let retry = on_retry.map(|cb| {
        view! {
            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=move |_| cb.run(())>
                "Try again"
            </Button>
        }
    });

    view! {
        <Alert attr:data-state="error" attr:role="alert" class="border-destructive/30">
            <AlertTitle class="text-destructive">{error_title(&error.kind)}</AlertTitle>
            <AlertDescription>{error.message}</AlertDescription>
            {retry}
        </Alert>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_title_per_kind() {
        assert_eq!(error_title(&ApiErrorKind::Timeout), "The server took too long to respond");
        assert_ne!(error_title(&ApiErrorKind::Network), error_title(&ApiErrorKind::Http));
    }
}
