use serde::{Deserialize, Serialize};

/// Which backend collection a listing is drawn from.
///
/// The kind picks the REST collection and the navigation path; it never
/// changes the shape of [`ContentItem`].
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ContentKind {
    Note,
    Folder,
    /// Shared lists ("grp" on the backend).
    #[serde(rename = "grp")]
    #[strum(to_string = "grp")]
    Group,
}

impl ContentKind {
    /// Plural path segment used by both the REST routes and the app routes.
    pub fn collection(self) -> String {
        format!("{}s", self.as_ref())
    }

    /// Parse a plural path segment (`notes`, `folders`, `grps`).
    pub fn from_collection(segment: &str) -> Option<Self> {
        segment.trim().strip_suffix('s')?.parse().ok()
    }
}

/// One listed entity: a note or a folder.
///
/// Notes carry `title`, folders carry `name`; the backend fills exactly one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ContentItem {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Last modification time as sent by the backend. Display only.
    #[serde(default)]
    pub timestamp: String,
}

impl ContentItem {
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// The folder currently being browsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ContainerScope(String);

impl ContainerScope {
    /// An explicit container from the route wins; otherwise the user's root.
    pub fn resolve(route_id: Option<&str>, root: Option<&str>) -> Option<Self> {
        route_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| root.map(str::trim).filter(|id| !id.is_empty()))
            .map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContainerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logged-in user record as persisted by the session store.
///
/// Only `root` is read by the browsing core; everything else is kept opaque.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AccountInfo {
    /// Identifier of the user's root folder.
    pub root: String,

    #[serde(flatten)]
    pub extra: serde_json::Value,
}
