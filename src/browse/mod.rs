//! Listing and deletion core for one container view.
//!
//! Everything here is plain state with no I/O: the controller in
//! `state::content_list` issues the requests and feeds results back in.

pub(crate) mod confirm;
pub(crate) mod dom;
pub(crate) mod registry;
pub(crate) mod router;
pub(crate) mod session;

pub(crate) use confirm::{
    CONFIRM_ACCEPT_LABEL, CONFIRM_CANCEL_LABEL, CONFIRM_QUESTION, CONFIRM_TITLE,
};
pub(crate) use router::{open_path, route, Action};
pub(crate) use session::{BrowseSession, DeleteOutcome, FetchOutcome};
