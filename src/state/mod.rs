pub(crate) mod content_list;

use crate::api::ApiClient;
use crate::models::AccountInfo;
use crate::storage::load_user_from_storage;
use leptos::prelude::*;

pub(crate) use content_list::ContentListController;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Written by the sign-in flow; read-only here.
    pub current_user: RwSignal<Option<AccountInfo>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::load_from_storage()),
            current_user: RwSignal::new(load_user_from_storage()),
        }
    }

    /// The folder shown when the route names no container.
    pub fn root_container(&self) -> Option<String> {
        self.current_user
            .with_untracked(|u| u.as_ref().map(|u| u.root.clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
