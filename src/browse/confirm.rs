/// Delete confirmation gate.
///
/// Cycles for the life of a view: `Idle` -> `PendingConfirm(p)` -> `Idle`.
/// A second delete-click while pending replaces the held position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ConfirmState {
    #[default]
    Idle,
    PendingConfirm(usize),
}

pub(crate) const CONFIRM_TITLE: &str = "Confirm delete";
pub(crate) const CONFIRM_QUESTION: &str = "Are you sure you want to delete?";
pub(crate) const CONFIRM_CANCEL_LABEL: &str = "Oops! Go back";
pub(crate) const CONFIRM_ACCEPT_LABEL: &str = "Yes";

impl ConfirmState {
    pub fn delete_clicked(&mut self, position: usize) {
        *self = Self::PendingConfirm(position);
    }

    /// Returns the held position, if any, and goes back to `Idle`.
    pub fn confirm(&mut self) -> Option<usize> {
        match std::mem::take(self) {
            Self::PendingConfirm(p) => Some(p),
            Self::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn pending(&self) -> Option<usize> {
        match self {
            Self::PendingConfirm(p) => Some(*p),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(ConfirmState::default(), ConfirmState::Idle);
    }

    #[test]
    fn test_delete_click_then_confirm_yields_position() {
        let mut s = ConfirmState::Idle;
        s.delete_clicked(2);
        assert_eq!(s, ConfirmState::PendingConfirm(2));
        assert_eq!(s.confirm(), Some(2));
        assert_eq!(s, ConfirmState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle_without_position() {
        let mut s = ConfirmState::Idle;
        s.delete_clicked(0);
        s.cancel();
        assert_eq!(s, ConfirmState::Idle);
        assert_eq!(s.confirm(), None);
    }

    #[test]
    fn test_second_click_replaces_pending_position() {
        let mut s = ConfirmState::Idle;
        s.delete_clicked(3);
        s.delete_clicked(7);
        assert_eq!(s.pending(), Some(7));
        assert_eq!(s.confirm(), Some(7));
        assert_eq!(s.confirm(), None);
    }
}
