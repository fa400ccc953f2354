use crate::models::{ContentItem, ContentKind};

/// Role tag carried by a rendered element inside the content grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ElementRole {
    Card(usize),
    DeleteAffordance(usize),
}

/// Where a click landed: the rendered elements from the origin up to the
/// grid boundary, leaf first. Untagged elements are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClickTarget {
    chain: Vec<Option<ElementRole>>,
}

impl ClickTarget {
    pub fn new(chain: Vec<Option<ElementRole>>) -> Self {
        Self { chain }
    }

    /// Nearest tagged element on the way up.
    pub fn nearest_role(&self) -> Option<ElementRole> {
        self.chain.iter().flatten().next().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Open(ContentItem),
    Delete(usize),
    Ignore,
}

/// Classify a click inside the grid.
///
/// Delete buttons sit inside their card, so on the upward walk they are
/// met first and win over the card.
pub(crate) fn route(target: &ClickTarget, items: &[ContentItem]) -> Action {
    let action = match target.nearest_role() {
        Some(ElementRole::DeleteAffordance(position)) => Action::Delete(position),
        Some(ElementRole::Card(position)) => items
            .get(position)
            .cloned()
            .map_or(Action::Ignore, Action::Open),
        None => Action::Ignore,
    };
    log::debug!("grid click -> {action:?}");
    action
}

/// App route that opens an item: `/{kind}s/open/{id}`.
pub(crate) fn open_path(kind: ContentKind, id: &str) -> String {
    format!("/{}/open/{}", kind.collection(), urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ContentItem> {
        ["a", "b", "c"]
            .iter()
            .map(|id| ContentItem {
                id: id.to_string(),
                title: None,
                name: Some(format!("folder {id}")),
                timestamp: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_click_inside_card_opens_item() {
        // <span> inside <div card=1> inside grid
        let target = ClickTarget::new(vec![None, Some(ElementRole::Card(1)), None]);
        let Action::Open(item) = route(&target, &items()) else {
            panic!("expected open");
        };
        assert_eq!(item.id, "b");
    }

    #[test]
    fn test_delete_affordance_wins_over_enclosing_card() {
        let target = ClickTarget::new(vec![
            None,
            Some(ElementRole::DeleteAffordance(2)),
            Some(ElementRole::Card(2)),
            None,
        ]);
        assert_eq!(route(&target, &items()), Action::Delete(2));
    }

    #[test]
    fn test_click_on_grid_gap_is_ignored() {
        let target = ClickTarget::new(vec![None]);
        assert_eq!(route(&target, &items()), Action::Ignore);
        assert_eq!(route(&ClickTarget::default(), &items()), Action::Ignore);
    }

    #[test]
    fn test_empty_container_ignores_every_click() {
        let empty: Vec<ContentItem> = vec![];
        for chain in [vec![], vec![None], vec![None, None, None]] {
            assert_eq!(route(&ClickTarget::new(chain), &empty), Action::Ignore);
        }
    }

    #[test]
    fn test_card_with_stale_position_is_ignored() {
        let target = ClickTarget::new(vec![Some(ElementRole::Card(9))]);
        assert_eq!(route(&target, &items()), Action::Ignore);
    }

    #[test]
    fn test_open_path_per_kind() {
        assert_eq!(open_path(ContentKind::Note, "n1"), "/notes/open/n1");
        assert_eq!(open_path(ContentKind::Folder, "f/1"), "/folders/open/f%2F1");
    }
}
