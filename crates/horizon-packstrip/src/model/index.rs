//! Index paths for addressing items inside sections.

use std::fmt;

/// The position of one item: a section and the item's index inside it.
///
/// Index paths are plain values. They stay meaningful for as long as the
/// catalog's counts do not change.
///
/// # Example
///
/// ```
/// use horizon_packstrip::model::IndexPath;
///
/// let index = IndexPath::new(2, 0);
/// assert_eq!(index.section(), 2);
/// assert_eq!(index.item(), 0);
/// assert_eq!(index.with_item(4), IndexPath::new(2, 4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    section: usize,
    item: usize,
}

impl IndexPath {
    /// Creates an index path for `item` of `section`.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Returns the section.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the item index within the section.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }

    /// Returns an index path in the same section pointing at another item.
    #[inline]
    pub const fn with_item(&self, item: usize) -> Self {
        Self::new(self.section, item)
    }
}

impl fmt::Debug for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexPath({}, {})", self.section, self.item)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_section_major() {
        let mut paths = vec![
            IndexPath::new(1, 0),
            IndexPath::new(0, 4),
            IndexPath::new(1, 2),
            IndexPath::new(0, 0),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                IndexPath::new(0, 0),
                IndexPath::new(0, 4),
                IndexPath::new(1, 0),
                IndexPath::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_formatting() {
        let index = IndexPath::from((3, 7));
        assert_eq!(format!("{index}"), "3:7");
        assert_eq!(format!("{index:?}"), "IndexPath(3, 7)");
    }
}
