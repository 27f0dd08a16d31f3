//! Focus state: which section is expanded and which item is selected.

use super::index::IndexPath;

/// The single source of truth for what a strip shows.
///
/// At most one section is expanded at any time, and in a stable state the
/// selected item (if any) lives in the expanded section. Only the
/// controller and the navigator mutate a `FocusState`; views read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused_section: Option<usize>,
    focused_item: Option<IndexPath>,
}

impl FocusState {
    /// Creates a fully collapsed state with nothing selected.
    pub const fn new() -> Self {
        Self {
            focused_section: None,
            focused_item: None,
        }
    }

    /// The expanded section.
    #[inline]
    pub fn focused_section(&self) -> Option<usize> {
        self.focused_section
    }

    /// The selected item.
    #[inline]
    pub fn focused_item(&self) -> Option<IndexPath> {
        self.focused_item
    }

    /// Returns whether `section` is the expanded section.
    #[inline]
    pub fn is_section_focused(&self, section: usize) -> bool {
        self.focused_section == Some(section)
    }

    /// Returns whether `index` is the selected item.
    #[inline]
    pub fn is_item_focused(&self, index: IndexPath) -> bool {
        self.focused_item == Some(index)
    }

    /// Returns whether the selected item, if any, lies in the expanded section.
    pub fn is_consistent(&self) -> bool {
        match self.focused_item {
            Some(index) => self.focused_section == Some(index.section()),
            None => true,
        }
    }

    /// Replaces the expanded section, returning the previous one.
    pub(crate) fn set_focused_section(&mut self, section: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.focused_section, section)
    }

    /// Replaces the selected item, returning the previous one.
    pub(crate) fn set_focused_item(&mut self, index: Option<IndexPath>) -> Option<IndexPath> {
        std::mem::replace(&mut self.focused_item, index)
    }

    /// Drops both the expanded section and the selected item.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_collapsed() {
        let state = FocusState::new();
        assert_eq!(state.focused_section(), None);
        assert_eq!(state.focused_item(), None);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_consistency() {
        let mut state = FocusState::new();
        state.set_focused_section(Some(2));
        state.set_focused_item(Some(IndexPath::new(2, 1)));
        assert!(state.is_consistent());
        assert!(state.is_item_focused(IndexPath::new(2, 1)));

        state.set_focused_section(Some(3));
        assert!(!state.is_consistent());

        state.clear();
        assert_eq!(state, FocusState::default());
    }
}
