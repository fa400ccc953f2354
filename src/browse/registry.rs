use crate::models::ContentItem;
use thiserror::Error;

/// A position that no longer (or never did) name an item in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no item at position {0}")]
pub(crate) struct NotFound(pub usize);

/// Position -> durable id lookup over the current display list.
///
/// Borrows the list it indexes, so it is rebuilt by construction whenever the
/// list is replaced or spliced and can never disagree with it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IdRegistry<'a> {
    items: &'a [ContentItem],
}

impl<'a> IdRegistry<'a> {
    pub fn over(items: &'a [ContentItem]) -> Self {
        Self { items }
    }

    pub fn resolve(&self, position: usize) -> Result<&'a str, NotFound> {
        self.items
            .get(position)
            .map(|item| item.id.as_str())
            .ok_or(NotFound(position))
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: Some(id.to_uppercase()),
            name: None,
            timestamp: String::new(),
        }
    }

    #[test]
    fn test_resolve_matches_list_positions() {
        let items = vec![item("a"), item("b"), item("c")];
        let reg = IdRegistry::over(&items);
        for (i, it) in items.iter().enumerate() {
            assert_eq!(reg.resolve(i), Ok(it.id.as_str()));
        }
    }

    #[test]
    fn test_resolve_out_of_range_is_not_found() {
        let items = vec![item("a")];
        let reg = IdRegistry::over(&items);
        assert_eq!(reg.resolve(1), Err(NotFound(1)));
        assert_eq!(IdRegistry::over(&[]).resolve(0), Err(NotFound(0)));
    }

    #[test]
    fn test_position_of_finds_durable_id() {
        let items = vec![item("a"), item("b")];
        let reg = IdRegistry::over(&items);
        assert_eq!(reg.position_of("b"), Some(1));
        assert_eq!(reg.position_of("zz"), None);
    }
}
