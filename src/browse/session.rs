use crate::api::ApiError;
use crate::browse::confirm::ConfirmState;
use crate::browse::registry::{IdRegistry, NotFound};
use crate::models::{ContainerScope, ContentItem, ContentKind};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
#[error("could not list {scope}: {cause}")]
pub(crate) struct FetchError {
    pub scope: ContainerScope,
    pub cause: ApiError,
}

#[derive(Clone, Debug, Error)]
#[error("could not delete {id}: {cause}")]
pub(crate) struct DeleteError {
    pub id: String,
    pub cause: ApiError,
}

/// Issued by [`BrowseSession::begin_fetch`]; hand it back with the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FetchTicket {
    generation: u64,
    pub kind: ContentKind,
    pub scope: ContainerScope,
}

/// Issued by [`BrowseSession::confirm`] for the one deletion allowed in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DeleteTicket {
    pub kind: ContentKind,
    pub scope: ContainerScope,
    pub id: String,
}

#[derive(Debug)]
pub(crate) enum FetchOutcome {
    /// The list was replaced with this many items.
    Applied(usize),
    /// A newer fetch was started since; the response was discarded.
    Stale,
    Failed(FetchError),
}

#[derive(Debug)]
pub(crate) enum DeleteOutcome {
    /// Backend acknowledged. `position` is where the item was spliced out of
    /// the current list, or `None` if a refresh had already dropped it.
    Deleted { id: String, position: Option<usize> },
    /// Completed for a container that is no longer being viewed.
    Dropped,
    Failed(DeleteError),
}

/// State of one container view: the display list, the pending delete, and
/// the bookkeeping that keeps late responses from touching the wrong list.
#[derive(Clone, Debug, Default)]
pub(crate) struct BrowseSession {
    kind: Option<ContentKind>,
    scope: Option<ContainerScope>,
    items: Vec<ContentItem>,
    confirm: ConfirmState,
    generation: u64,
    loading: bool,
    deleting: Option<String>,
    last_error: Option<String>,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn registry(&self) -> IdRegistry<'_> {
        IdRegistry::over(&self.items)
    }

    pub fn kind(&self) -> Option<ContentKind> {
        self.kind
    }

    pub fn confirm_state(&self) -> ConfirmState {
        self.confirm
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Start a listing for `scope`. Moving to another container (or kind)
    /// discards the current list and any pending or in-flight delete.
    pub fn begin_fetch(&mut self, kind: ContentKind, scope: ContainerScope) -> FetchTicket {
        let same_view = self.kind == Some(kind) && self.scope.as_ref() == Some(&scope);
        if !same_view {
            self.items.clear();
            self.confirm.cancel();
            self.deleting = None;
            self.kind = Some(kind);
            self.scope = Some(scope.clone());
        }

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.last_error = None;

        log::debug!("fetch #{} begin: {kind} in {scope}", self.generation);
        FetchTicket {
            generation: self.generation,
            kind,
            scope,
        }
    }

    /// Leave the current view without entering another, e.g. when a route
    /// names no container and no root is known. Outstanding fetches go stale.
    pub fn reset(&mut self) {
        self.kind = None;
        self.scope = None;
        self.items.clear();
        self.confirm.cancel();
        self.deleting = None;
        self.loading = false;
        self.last_error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Apply a listing response, unless a newer fetch has superseded it.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ContentItem>, ApiError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "fetch #{} for {} discarded (current #{})",
                ticket.generation,
                ticket.scope,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                let n = items.len();
                self.items = items;
                // Positions held for confirmation referred to the old list.
                self.confirm.cancel();
                log::debug!("fetch #{} applied: {n} items", ticket.generation);
                FetchOutcome::Applied(n)
            }
            Err(cause) => {
                let err = FetchError {
                    scope: ticket.scope,
                    cause,
                };
                log::warn!("{err}");
                self.last_error = Some(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Returns `false` when refused because a deletion is already in flight.
    pub fn delete_clicked(&mut self, position: usize) -> bool {
        if self.deleting.is_some() {
            log::debug!("delete-click at {position} ignored: deletion in flight");
            return false;
        }
        self.confirm.delete_clicked(position);
        true
    }

    pub fn cancel(&mut self) {
        self.confirm.cancel();
    }

    /// Confirm the pending delete. Yields a ticket for the request to issue,
    /// or `None` when nothing is pending, the position no longer resolves,
    /// or another deletion is still in flight.
    pub fn confirm(&mut self) -> Option<DeleteTicket> {
        if self.deleting.is_some() {
            return None;
        }
        let position = self.confirm.confirm()?;
        let (kind, scope) = (self.kind?, self.scope.clone()?);

        let id = match self.registry().resolve(position) {
            Ok(id) => id.to_string(),
            Err(NotFound(p)) => {
                log::debug!("confirm skipped: no item at position {p}");
                return None;
            }
        };

        log::info!("deleting {kind} {id} from {scope}");
        self.deleting = Some(id.clone());
        Some(DeleteTicket { kind, scope, id })
    }

    /// Reconcile a finished delete request. The splice position is looked up
    /// again by id, since the list may have been refreshed while waiting.
    pub fn finish_delete(
        &mut self,
        ticket: DeleteTicket,
        result: Result<(), ApiError>,
    ) -> DeleteOutcome {
        let same_view =
            self.kind == Some(ticket.kind) && self.scope.as_ref() == Some(&ticket.scope);
        if !same_view {
            log::debug!("delete of {} finished after leaving {}", ticket.id, ticket.scope);
            return DeleteOutcome::Dropped;
        }

        // A ticket from an earlier visit to this container must not release
        // the deletion that is in flight now.
        if self.deleting.as_deref() == Some(ticket.id.as_str()) {
            self.deleting = None;
            self.confirm.cancel();
        }

        match result {
            Ok(()) => {
                let position = self.registry().position_of(&ticket.id);
                if let Some(p) = position {
                    self.items.remove(p);
                }
                DeleteOutcome::Deleted {
                    id: ticket.id,
                    position,
                }
            }
            Err(cause) => {
                let err = DeleteError {
                    id: ticket.id,
                    cause,
                };
                log::warn!("{err}");
                self.last_error = Some(err.to_string());
                DeleteOutcome::Failed(err)
            }
        }
    }
}
