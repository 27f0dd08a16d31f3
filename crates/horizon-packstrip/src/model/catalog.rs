//! The data source a strip reads its sections and items from.
//!
//! A [`SectionCatalog`] answers two kinds of questions: how many sections and
//! items exist, and what a given header or cell should show. The strip never
//! caches either answer; every query goes back to the catalog.

use std::sync::Arc;

use horizon_packstrip_core::{StripError, StripResult};

use super::index::IndexPath;

/// Display data for one item cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellContent {
    /// Caption shown under the thumbnail.
    pub text: String,
    /// Thumbnail location, resolved by the render host.
    pub thumbnail_url: Option<String>,
    /// Whether the cell is the focused item.
    ///
    /// Owned by the strip: it is reset after the catalog populates the cell.
    pub selected: bool,
}

/// Display data for one section header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderContent {
    /// Stable identifier of the section's pack.
    pub guid: String,
    /// Caption shown under the thumbnail.
    pub text: String,
    /// Thumbnail location, resolved by the render host.
    pub thumbnail_url: Option<String>,
}

/// The data source for an expandable strip.
///
/// At minimum, implement [`section_count`](SectionCatalog::section_count)
/// and [`item_count`](SectionCatalog::item_count). Override the `populate_*`
/// methods to supply what headers and cells display.
///
/// Counts must stay stable while a strip is using them; call
/// `ExpandableStrip::reload_data` after changing them.
///
/// # Example
///
/// ```
/// use horizon_packstrip::model::{HeaderContent, SectionCatalog};
///
/// struct Filters {
///     packs: Vec<(String, usize)>,
/// }
///
/// impl SectionCatalog for Filters {
///     fn section_count(&self) -> usize {
///         self.packs.len()
///     }
///
///     fn item_count(&self, section: usize) -> usize {
///         self.packs.get(section).map_or(0, |(_, count)| *count)
///     }
///
///     fn populate_header(&self, section: usize, header: &mut HeaderContent) {
///         if let Some((name, _)) = self.packs.get(section) {
///             header.text = name.clone();
///         }
///     }
/// }
/// ```
pub trait SectionCatalog: Send + Sync {
    /// Returns the number of sections.
    fn section_count(&self) -> usize;

    /// Returns the number of items in `section`.
    ///
    /// May be 0. Only called with `section < section_count()`.
    fn item_count(&self, section: usize) -> usize;

    /// Fills in the display data for the cell at `index`.
    ///
    /// Only called with an `index` that passes
    /// [`check_index`](SectionCatalog::check_index).
    fn populate_cell(&self, index: IndexPath, cell: &mut CellContent) {
        let _ = (index, cell);
    }

    /// Fills in the display data for the header of `section`.
    ///
    /// Only called with `section < section_count()`.
    fn populate_header(&self, section: usize, header: &mut HeaderContent) {
        let _ = (section, header);
    }

    /// Returns the item count of `section`, or an error if the section does
    /// not exist.
    fn checked_item_count(&self, section: usize) -> StripResult<usize> {
        let section_count = self.section_count();
        if section >= section_count {
            return Err(StripError::SectionOutOfRange {
                section,
                section_count,
            });
        }
        Ok(self.item_count(section))
    }

    /// Verifies that `index` addresses an existing item.
    fn check_index(&self, index: IndexPath) -> StripResult<()> {
        let item_count = self.checked_item_count(index.section())?;
        if index.item() >= item_count {
            return Err(StripError::ItemOutOfRange {
                section: index.section(),
                item: index.item(),
                item_count,
            });
        }
        Ok(())
    }
}

impl<T: SectionCatalog + ?Sized> SectionCatalog for Arc<T> {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }

    fn populate_cell(&self, index: IndexPath, cell: &mut CellContent) {
        (**self).populate_cell(index, cell);
    }

    fn populate_header(&self, section: usize, header: &mut HeaderContent) {
        (**self).populate_header(section, header);
    }
}

/// One item inside a [`Pack`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackItem {
    /// Caption.
    pub title: String,
    /// Thumbnail location.
    pub thumbnail_url: Option<String>,
}

impl PackItem {
    /// Creates an item with a caption and no thumbnail.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            thumbnail_url: None,
        }
    }

    /// Sets the thumbnail using builder pattern.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// A named section and its items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pack {
    /// Stable identifier.
    pub guid: String,
    /// Caption shown on the header.
    pub title: String,
    /// Header thumbnail location.
    pub thumbnail_url: Option<String>,
    /// The pack's items, in display order.
    pub items: Vec<PackItem>,
}

impl Pack {
    /// Creates an empty pack.
    pub fn new(guid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
            thumbnail_url: None,
            items: Vec::new(),
        }
    }

    /// Sets the header thumbnail using builder pattern.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Appends an item using builder pattern.
    pub fn with_item(mut self, item: PackItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A catalog backed by an owned list of [`Pack`]s.
///
/// # Example
///
/// ```
/// use horizon_packstrip::model::{PackCatalog, SectionCatalog};
///
/// let catalog = PackCatalog::from_counts(&[1, 3, 5]);
/// assert_eq!(catalog.section_count(), 3);
/// assert_eq!(catalog.item_count(2), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackCatalog {
    packs: Vec<Pack>,
}

impl PackCatalog {
    /// Creates a catalog from a list of packs.
    pub fn new(packs: Vec<Pack>) -> Self {
        Self { packs }
    }

    /// Creates a catalog of generated packs with the given item counts.
    ///
    /// Packs are titled `Pack N` and items `Item N`, both counted from 1.
    pub fn from_counts(counts: &[usize]) -> Self {
        let packs = counts
            .iter()
            .enumerate()
            .map(|(section, &count)| {
                let mut pack = Pack::new(format!("pack-{section}"), format!("Pack {}", section + 1));
                pack.items = (0..count)
                    .map(|item| PackItem::new(format!("Item {}", item + 1)))
                    .collect();
                pack
            })
            .collect();
        Self { packs }
    }

    /// Returns the packs.
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    /// Returns the pack for `section`, if any.
    pub fn pack(&self, section: usize) -> Option<&Pack> {
        self.packs.get(section)
    }

    /// Returns the number of packs.
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Returns whether the catalog has no packs.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl SectionCatalog for PackCatalog {
    fn section_count(&self) -> usize {
        self.packs.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.packs.get(section).map_or(0, |pack| pack.items.len())
    }

    fn populate_cell(&self, index: IndexPath, cell: &mut CellContent) {
        if let Some(item) = self
            .packs
            .get(index.section())
            .and_then(|pack| pack.items.get(index.item()))
        {
            cell.text = item.title.clone();
            cell.thumbnail_url = item.thumbnail_url.clone();
        }
    }

    fn populate_header(&self, section: usize, header: &mut HeaderContent) {
        if let Some(pack) = self.packs.get(section) {
            header.guid = pack.guid.clone();
            header.text = pack.title.clone();
            header.thumbnail_url = pack.thumbnail_url.clone();
        }
    }
}
