use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    // Masonry-style columns, like a card-columns grid.
    clx! {CardGrid, div, "h-full columns-1 gap-4 sm:columns-2 lg:columns-3 [&>*]:mb-4 [&>*]:break-inside-avoid"}
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-2 rounded-xl border p-4 shadow-sm hover:cursor-pointer hover:bg-accent/40"}
    clx! {CardHeader, div, "flex items-start justify-between gap-2"}
    clx! {CardTitle, h2, "leading-none font-semibold break-words"}
    clx! {CardDescription, p, "text-muted-foreground text-xs"}
}

pub use components::*;
