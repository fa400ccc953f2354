use crate::browse::dom::{click_target_from_event, ROLE_CARD, ROLE_DELETE};
use crate::browse::{CONFIRM_ACCEPT_LABEL, CONFIRM_CANCEL_LABEL, CONFIRM_QUESTION, CONFIRM_TITLE};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardDescription, CardGrid,
    CardHeader, CardTitle, DialogDescription, DialogFooter, DialogHeader, DialogPanel, DialogTitle,
    Spinner,
};
use crate::models::ContentKind;
use crate::state::{AppContext, ContentListController};
use icons::X;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct ContentRouteParams {
    /// Plural collection segment: `notes`, `folders`, `grps`.
    pub kind: Option<String>,
    pub id: Option<String>,
}

fn kind_from_params(p: &ContentRouteParams) -> ContentKind {
    p.kind
        .as_deref()
        .and_then(ContentKind::from_collection)
        .unwrap_or(ContentKind::Note)
}

/// `/`, `/:kind` and `/:kind/folder/:id`.
#[component]
pub fn ContentPage() -> impl IntoView {
    let params = use_params::<ContentRouteParams>();

    let kind = Signal::derive(move || {
        params
            .get()
            .map(|p| kind_from_params(&p))
            .unwrap_or(ContentKind::Note)
    });
    let container = Signal::derive(move || params.get().ok().and_then(|p| p.id));

    view! { <ContentGrid kind=kind container=container /> }
}

/// `/:kind/open/:id`. Folders open into a listing of their notes; the note
/// editor itself lives elsewhere.
#[component]
pub fn OpenPage() -> impl IntoView {
    let params = use_params::<ContentRouteParams>();

    let kind = Signal::derive(move || {
        params
            .get()
            .map(|p| kind_from_params(&p))
            .unwrap_or(ContentKind::Note)
    });
    let id = Signal::derive(move || params.get().ok().and_then(|p| p.id));

    view! {
        <Show
            when=move || kind.get() == ContentKind::Folder
            fallback=move || view! {
                <div class="px-4 py-8 text-xs text-muted-foreground">
                    {move || format!("Opened {} {}", kind.get(), id.get().unwrap_or_default())}
                </div>
            }
        >
            <ContentGrid kind=Signal::stored(ContentKind::Note) container=id />
        </Show>
    }
}

/// Card grid for one container, with a single delegated click handler and
/// the delete confirmation dialog.
#[component]
pub(crate) fn ContentGrid(
    #[prop(into)] kind: Signal<ContentKind>,
    #[prop(into)] container: Signal<Option<String>>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let signed_in = app_state.0.api_client.with_untracked(|c| c.is_authenticated());
    let ctl = ContentListController::new(app_state);
    let session = ctl.session;
    let navigate = StoredValue::new(use_navigate());
    let grid_ref: NodeRef<html::Div> = NodeRef::new();

    // Refetch on mount and whenever kind or container changes.
    Effect::new(move |_| {
        let k = kind.get();
        let id = container.get();
        ctl.load(k, id);
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctl.cancel();
        }
    });
    on_cleanup(move || key_handle.remove());

    let on_grid_click = move |ev: web_sys::MouseEvent| {
        let Some(grid) = grid_ref.get_untracked() else {
            return;
        };
        let target = click_target_from_event(&ev, &grid);
        if let Some(path) = ctl.on_grid_click(&target) {
            navigate.with_value(|nav| nav(&path, Default::default()));
        }
    };

    let loading = move || session.with(|s| s.is_loading());
    let deleting = move || session.with(|s| s.is_deleting());
    let dialog_open = move || {
        session.with(|s| s.confirm_state().pending().is_some() || s.is_deleting())
    };

    view! {
        <div class="mx-auto w-full max-w-[1080px] px-4 py-8 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">{move || kind.get().collection()}</h1>
                <Show when=loading fallback=|| ().into_view()>
                    <Spinner />
                </Show>
            </div>

            <Show when=move || !signed_in fallback=|| ().into_view()>
                <div class="text-xs text-muted-foreground">"Not signed in."</div>
            </Show>

            <Show when=move || session.with(|s| s.last_error().is_some()) fallback=|| ().into_view()>
                <Alert class="border-destructive/30">
                    <AlertDescription class="text-destructive">
                        {move || session.with(|s| s.last_error().unwrap_or_default().to_string())}
                    </AlertDescription>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:title="Dismiss"
                        on:click=move |_| ctl.dismiss_error()
                    >
                        <X />
                    </Button>
                </Alert>
            </Show>

            <div node_ref=grid_ref class="min-h-[50vh]" on:click=on_grid_click>
                <Show
                    when=move || session.with(|s| !s.items().is_empty())
                    fallback=move || view! {
                        <div class="text-xs text-muted-foreground">
                            {move || if loading() { "Loading..." } else { "Nothing here yet." }}
                        </div>
                    }
                >
                    <CardGrid>
                        {move || {
                            session.with(|s| {
                                s.items()
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        let name = item.display_name().to_string();
                                        let timestamp = item.timestamp.clone();
                                        view! {
                                            <Card attr:data-role=ROLE_CARD attr:data-position=i.to_string()>
                                                <CardHeader>
                                                    <CardTitle>{name}</CardTitle>
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Icon
                                                        attr:title="Delete"
                                                        attr:data-role=ROLE_DELETE
                                                        attr:data-position=i.to_string()
                                                    >
                                                        <X />
                                                    </Button>
                                                </CardHeader>
                                                <CardDescription>{timestamp}</CardDescription>
                                            </Card>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </CardGrid>
                </Show>
            </div>

            <Show when=dialog_open fallback=|| ().into_view()>
                <div class="fixed inset-0 z-60 bg-black/50" on:click=move |_| ctl.cancel() />
                <DialogPanel attr:role="dialog" attr:aria-modal="true">
                    <DialogHeader>
                        <DialogTitle>{CONFIRM_TITLE}</DialogTitle>
                    </DialogHeader>
                    <DialogDescription>{CONFIRM_QUESTION}</DialogDescription>
                    <DialogFooter>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            attr:disabled=deleting
                            on:click=move |_| ctl.cancel()
                        >
                            {CONFIRM_CANCEL_LABEL}
                        </Button>
                        <Button
                            variant=ButtonVariant::Destructive
                            size=ButtonSize::Sm
                            attr:disabled=deleting
                            on:click=move |_| ctl.confirm()
                        >
                            <span class="inline-flex items-center gap-2">
                                <Show when=deleting fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if deleting() { "Deleting..." } else { CONFIRM_ACCEPT_LABEL }}
                            </span>
                        </Button>
                    </DialogFooter>
                </DialogPanel>
            </Show>
        </div>
    }
}
