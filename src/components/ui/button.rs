use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-ring/50 focus-visible:ring-[3px] w-fit hover:cursor-pointer active:scale-[0.98] touch-manipulation select-none",
        variants: {
            variant: {
                Default: "bg-primary text-primary-foreground rounded-md shadow-xs hover:bg-primary/90",
                Secondary: "bg-secondary text-secondary-foreground rounded-md hover:bg-secondary/80",
                Outline: "border bg-transparent rounded-md hover:bg-accent hover:text-accent-foreground",
                Ghost: "rounded-md hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
                Destructive: "bg-destructive text-white rounded-md hover:bg-destructive/90",
                // Category chips and the subscribe pill.
                Chip: "rounded-lg bg-secondary text-secondary-foreground hover:bg-secondary/70",
                ChipActive: "rounded-lg bg-foreground text-background",
                Subscribe: "rounded-full bg-foreground text-background hover:bg-foreground/85",
            },
            size: {
                Default: "h-9 px-4 py-2 has-[>svg]:px-3",
                Sm: "h-8 gap-1.5 px-3 has-[>svg]:px-2.5",
                Icon: "size-9 rounded-full",
                Chip: "h-8 px-3 text-sm",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
