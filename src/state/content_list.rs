use crate::api::ApiErrorKind;
use crate::browse::router::ClickTarget;
use crate::browse::{open_path, route, Action, BrowseSession, DeleteOutcome, FetchOutcome};
use crate::models::{ContainerScope, ContentKind};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Drives one container view: issues the list/delete requests for a
/// [`BrowseSession`] and feeds the responses back in.
///
/// The session lives in a signal so the grid re-renders on every change;
/// every mutation goes through `update`, so the list and the position lookup
/// change together.
#[derive(Clone, Copy)]
pub(crate) struct ContentListController {
    app_state: StoredValue<AppContext>,
    pub session: RwSignal<BrowseSession>,
}

impl ContentListController {
    pub fn new(app_state: AppContext) -> Self {
        Self {
            app_state: StoredValue::new(app_state),
            session: RwSignal::new(BrowseSession::new()),
        }
    }

    /// Called on mount and whenever the routed container changes.
    pub fn load(&self, kind: ContentKind, route_id: Option<String>) {
        let root = self.app_state.with_value(|a| a.0.root_container());
        let Some(scope) = ContainerScope::resolve(route_id.as_deref(), root.as_deref()) else {
            log::warn!("no container to list: route has none and no root folder is known");
            self.session.update(BrowseSession::reset);
            return;
        };

        let Some(ticket) = self.session.try_update(|s| s.begin_fetch(kind, scope)) else {
            return;
        };

        let api_client = self.app_state.with_value(|a| a.0.api_client.get_untracked());
        let session = self.session;
        spawn_local(async move {
            let result = api_client
                .list_contents(ticket.kind, ticket.scope.as_str())
                .await;

            match session.try_update(|s| s.finish_fetch(ticket, result)) {
                Some(FetchOutcome::Applied(n)) => log::info!("listed {n} items"),
                Some(FetchOutcome::Failed(err)) if err.cause.kind == ApiErrorKind::Unauthorized => {
                    log::warn!("listing {} rejected: sign in again", err.scope);
                }
                Some(FetchOutcome::Failed(_) | FetchOutcome::Stale) | None => {}
            }
        });
    }

    /// Delegated click handler for the whole grid. Returns the path to
    /// navigate to when a card was opened.
    pub fn on_grid_click(&self, target: &ClickTarget) -> Option<String> {
        let (action, kind) = self
            .session
            .with_untracked(|s| (route(target, s.items()), s.kind()));

        match action {
            Action::Open(item) => kind.map(|k| open_path(k, &item.id)),
            Action::Delete(position) => {
                self.session.update(|s| {
                    s.delete_clicked(position);
                });
                None
            }
            Action::Ignore => None,
        }
    }

    pub fn cancel(&self) {
        self.session.update(BrowseSession::cancel);
    }

    /// Confirm the pending delete and, if it resolves, send it.
    pub fn confirm(&self) {
        let Some(ticket) = self.session.try_update(BrowseSession::confirm).flatten() else {
            return;
        };

        let api_client = self.app_state.with_value(|a| a.0.api_client.get_untracked());
        let session = self.session;
        spawn_local(async move {
            let result = api_client.delete_content(ticket.kind, &ticket.id).await;

            match session.try_update(|s| s.finish_delete(ticket, result)) {
                Some(DeleteOutcome::Deleted { id, position }) => {
                    log::info!("deleted {id} (was at {position:?})");
                }
                Some(DeleteOutcome::Failed(err)) => {
                    log::error!("delete failed: {}", err.cause);
                }
                Some(DeleteOutcome::Dropped) | None => {}
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.session.update(BrowseSession::clear_error);
    }
}
