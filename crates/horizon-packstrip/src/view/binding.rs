//! Translation of focus state into render-host calls.
//!
//! The render host (whatever toolkit actually draws the strip) implements
//! [`ViewHost`]. It receives commands: invalidate layout, apply a batch
//! update, scroll, reload. While laying out it asks questions back through
//! a [`ViewBindingAdapter`]: how many items a section shows, how large its
//! header and footer are, what a cell displays.
//!
//! # Batch protocol
//!
//! A focus transition reaches the host as:
//!
//! 1. [`ViewHost::invalidate_layout_metrics`], because header/footer sizes
//!    depend on which section is expanded;
//! 2. [`ViewHost::perform_batch_update`] with every deleted and inserted item;
//! 3. once the host reports the batch as finished, optionally
//!    [`ViewHost::scroll_to_section_header`].
//!
//! Focus state is already updated when step 1 runs, so any query the host
//! makes during the batch sees the new state.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use horizon_packstrip_core::logging::targets;
use horizon_packstrip_core::{PerfSpan, StripResult};

use crate::config::{Size, StripConfig};
use crate::model::{CellContent, FocusState, HeaderContent, IndexPath, SectionCatalog};

use super::controller::ExpandDiff;

/// Where a scrolled-to element ends up in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAlignment {
    /// Aligned with the leading edge.
    Leading,
    /// Centered horizontally.
    #[default]
    Center,
    /// Moved just far enough to be fully visible.
    Nearest,
}

/// Identifies one batch update until the host reports it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(u64);

impl BatchId {
    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch#{}", self.0)
    }
}

/// The item deletions and insertions of one focus transition, applied by
/// the host as a single animated update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchUpdate {
    id: BatchId,
    deleted: Vec<IndexPath>,
    inserted: Vec<IndexPath>,
}

impl BatchUpdate {
    /// Builds the update for `diff`.
    pub fn from_diff(id: BatchId, diff: &ExpandDiff) -> Self {
        Self {
            id,
            deleted: diff
                .collapsed
                .iter()
                .flat_map(|span| span.index_paths())
                .collect(),
            inserted: diff
                .expanded
                .iter()
                .flat_map(|span| span.index_paths())
                .collect(),
        }
    }

    /// The id to pass back to `ExpandableStrip::on_batch_update_finished`.
    pub fn id(&self) -> BatchId {
        self.id
    }

    /// Items to remove, in ascending order.
    pub fn deleted(&self) -> &[IndexPath] {
        &self.deleted
    }

    /// Items to insert, in ascending order.
    pub fn inserted(&self) -> &[IndexPath] {
        &self.inserted
    }
}

/// The render host driven by a strip.
///
/// Implemented by whatever toolkit draws the strip. All calls are made
/// synchronously from the strip's event handlers; animated work may finish
/// later, and batch completion must be reported back through
/// `ExpandableStrip::on_batch_update_finished`.
///
/// `()` is a headless host that ignores every command.
pub trait ViewHost {
    /// Drops cached header/footer sizes; they are about to change.
    fn invalidate_layout_metrics(&mut self);

    /// Applies deletions and insertions in one animated update.
    fn perform_batch_update(&mut self, update: &BatchUpdate);

    /// Scrolls so that the header of `section` sits at the leading edge.
    fn scroll_to_section_header(&mut self, section: usize, animated: bool);

    /// Scrolls the cell at `index` into view.
    fn scroll_to_item(&mut self, index: IndexPath, alignment: ScrollAlignment, animated: bool);

    /// Re-renders the given cells, e.g. to update their selected state.
    fn reload_items(&mut self, items: &[IndexPath]);

    /// Discards everything and re-queries the whole strip.
    fn reload_data(&mut self);
}

impl ViewHost for () {
    fn invalidate_layout_metrics(&mut self) {}

    fn perform_batch_update(&mut self, _update: &BatchUpdate) {}

    fn scroll_to_section_header(&mut self, _section: usize, _animated: bool) {}

    fn scroll_to_item(&mut self, _index: IndexPath, _alignment: ScrollAlignment, _animated: bool) {
    }

    fn reload_items(&mut self, _items: &[IndexPath]) {}

    fn reload_data(&mut self) {}
}

/// Answers the render host's layout and content queries from focus state.
///
/// A short-lived borrow over the catalog, the focus state and the
/// configuration; obtain one from `ExpandableStrip::binding`.
pub struct ViewBindingAdapter<'a, C: ?Sized> {
    catalog: &'a C,
    focus: &'a FocusState,
    config: &'a StripConfig,
}

impl<'a, C: SectionCatalog + ?Sized> ViewBindingAdapter<'a, C> {
    /// Creates an adapter.
    pub fn new(catalog: &'a C, focus: &'a FocusState, config: &'a StripConfig) -> Self {
        Self {
            catalog,
            focus,
            config,
        }
    }

    /// Number of sections; every section always shows its header.
    pub fn number_of_sections(&self) -> usize {
        self.catalog.section_count()
    }

    /// Number of visible items in `section`: all of them when it is
    /// expanded, none otherwise.
    pub fn number_of_items_in_section(&self, section: usize) -> usize {
        if self.focus.is_section_focused(section) && section < self.catalog.section_count() {
            self.catalog.item_count(section)
        } else {
            0
        }
    }

    /// Size of every item cell.
    pub fn item_size(&self) -> Size {
        self.config.item_size
    }

    /// Size of the header of `section`. Headers never collapse.
    pub fn header_size(&self, _section: usize) -> Size {
        Size::new(self.config.header_width, self.config.strip_height)
    }

    /// Size of the footer of `section`: only the expanded section has one.
    pub fn footer_size(&self, section: usize) -> Size {
        if self.focus.is_section_focused(section) {
            Size::new(self.config.footer_width, self.config.strip_height)
        } else {
            Size::ZERO
        }
    }

    /// Display data for the cell at `index`, with `selected` reflecting
    /// the current selection.
    ///
    /// # Errors
    ///
    /// Fails if `index` does not address an item; the catalog is not asked.
    pub fn cell_content(&self, index: IndexPath) -> StripResult<CellContent> {
        self.catalog.check_index(index).inspect_err(|err| {
            tracing::error!(target: targets::BINDING, %err, %index, "rejected cell query");
        })?;
        let mut cell = CellContent::default();
        self.catalog.populate_cell(index, &mut cell);
        cell.selected = self.focus.is_item_focused(index);
        Ok(cell)
    }

    /// Display data for the header of `section`.
    ///
    /// # Errors
    ///
    /// Fails if `section` does not exist; the catalog is not asked.
    pub fn header_content(&self, section: usize) -> StripResult<HeaderContent> {
        self.catalog.checked_item_count(section).inspect_err(|err| {
            tracing::error!(target: targets::BINDING, %err, "rejected header query");
        })?;
        let mut header = HeaderContent::default();
        self.catalog.populate_header(section, &mut header);
        Ok(header)
    }
}

impl<C: ?Sized> fmt::Debug for ViewBindingAdapter<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewBindingAdapter")
            .field("focus", self.focus)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingBatch {
    id: BatchId,
    scroll_to_header: bool,
}

/// Issues batch updates to a host and remembers which ones are still
/// animating.
///
/// Batches are expected to finish in the order they were issued, but a
/// completion for any pending id is accepted.
#[derive(Debug, Default)]
pub struct BatchQueue {
    next_id: u64,
    pending: VecDeque<PendingBatch>,
}

impl BatchQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidates layout metrics and applies `diff` as one batch update.
    ///
    /// `scroll_to_header` records whether finishing this batch should bring
    /// the expanded header into place.
    pub fn apply<H: ViewHost + ?Sized>(
        &mut self,
        host: &mut H,
        diff: &ExpandDiff,
        scroll_to_header: bool,
    ) -> BatchId {
        let _span = PerfSpan::new("apply_batch_update");

        let id = BatchId(self.next_id);
        self.next_id += 1;
        let update = BatchUpdate::from_diff(id, diff);

        host.invalidate_layout_metrics();
        host.perform_batch_update(&update);
        self.pending.push_back(PendingBatch {
            id,
            scroll_to_header,
        });

        tracing::debug!(
            target: targets::BINDING,
            %id,
            deleted = update.deleted().len(),
            inserted = update.inserted().len(),
            scroll_to_header,
            "issued batch update"
        );
        id
    }

    /// Marks `id` as finished.
    ///
    /// Returns whether the batch asked for a header scroll, or `None` if the
    /// id is not pending.
    pub fn finish(&mut self, id: BatchId) -> Option<bool> {
        let Some(position) = self.pending.iter().position(|batch| batch.id == id) else {
            tracing::warn!(target: targets::BINDING, %id, "completion for unknown batch");
            return None;
        };
        if position != 0 {
            tracing::debug!(target: targets::BINDING, %id, position, "batch finished out of order");
        }
        self.pending
            .remove(position)
            .map(|batch| batch.scroll_to_header)
    }

    /// Number of batches the host has not reported finished.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Forgets every pending batch.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pack, PackCatalog, PackItem};
    use crate::view::controller::{ExpandCollapseController, SectionSpan};
    use horizon_packstrip_core::StripError;

    #[derive(Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl ViewHost for CallLog {
        fn invalidate_layout_metrics(&mut self) {
            self.calls.push("invalidate".into());
        }

        fn perform_batch_update(&mut self, update: &BatchUpdate) {
            self.calls.push(format!(
                "batch -{} +{}",
                update.deleted().len(),
                update.inserted().len()
            ));
        }

        fn scroll_to_section_header(&mut self, section: usize, _animated: bool) {
            self.calls.push(format!("header {section}"));
        }

        fn scroll_to_item(&mut self, index: IndexPath, _alignment: ScrollAlignment, _animated: bool) {
            self.calls.push(format!("item {index}"));
        }

        fn reload_items(&mut self, items: &[IndexPath]) {
            self.calls.push(format!("reload {}", items.len()));
        }

        fn reload_data(&mut self) {
            self.calls.push("reload all".into());
        }
    }

    #[test]
    fn test_item_counts_follow_focus() {
        let catalog = PackCatalog::from_counts(&[1, 3, 5]);
        let mut focus = FocusState::new();
        let config = StripConfig::default();

        {
            let binding = ViewBindingAdapter::new(&catalog, &focus, &config);
            assert_eq!(binding.number_of_sections(), 3);
            assert!((0..3).all(|s| binding.number_of_items_in_section(s) == 0));
        }

        ExpandCollapseController::toggle(&mut focus, &catalog, 2).unwrap();
        let binding = ViewBindingAdapter::new(&catalog, &focus, &config);
        assert_eq!(binding.number_of_items_in_section(0), 0);
        assert_eq!(binding.number_of_items_in_section(1), 0);
        assert_eq!(binding.number_of_items_in_section(2), 5);
    }

    #[test]
    fn test_footer_only_for_focused_section() {
        let catalog = PackCatalog::from_counts(&[2, 2]);
        let mut focus = FocusState::new();
        let config = StripConfig::default();
        ExpandCollapseController::toggle(&mut focus, &catalog, 1).unwrap();

        let binding = ViewBindingAdapter::new(&catalog, &focus, &config);
        assert!(binding.footer_size(0).is_empty());
        assert_eq!(binding.footer_size(1), Size::new(15.0, 80.0));
        assert_eq!(binding.header_size(0), Size::new(65.0, 80.0));
        assert_eq!(binding.header_size(1), binding.header_size(0));
        assert_eq!(binding.item_size(), Size::new(65.0, 80.0));
    }

    #[test]
    fn test_cell_content_marks_selection() {
        let catalog = PackCatalog::new(vec![Pack::new("p", "Portraits")
            .with_item(PackItem::new("Soft"))
            .with_item(PackItem::new("Vivid"))]);
        let mut focus = FocusState::new();
        let config = StripConfig::default();
        ExpandCollapseController::toggle(&mut focus, &catalog, 0).unwrap();
        focus.set_focused_item(Some(IndexPath::new(0, 1)));

        let binding = ViewBindingAdapter::new(&catalog, &focus, &config);
        let soft = binding.cell_content(IndexPath::new(0, 0)).unwrap();
        let vivid = binding.cell_content(IndexPath::new(0, 1)).unwrap();
        assert_eq!(soft.text, "Soft");
        assert!(!soft.selected);
        assert_eq!(vivid.text, "Vivid");
        assert!(vivid.selected);
        assert_eq!(binding.header_content(0).unwrap().text, "Portraits");
    }

    #[test]
    fn test_content_queries_reject_missing_indices() {
        let catalog = PackCatalog::from_counts(&[2]);
        let focus = FocusState::new();
        let config = StripConfig::default();
        let binding = ViewBindingAdapter::new(&catalog, &focus, &config);

        assert_eq!(
            binding.cell_content(IndexPath::new(0, 2)),
            Err(StripError::ItemOutOfRange {
                section: 0,
                item: 2,
                item_count: 2
            })
        );
        assert_eq!(
            binding.header_content(1),
            Err(StripError::SectionOutOfRange {
                section: 1,
                section_count: 1
            })
        );
    }

    #[test]
    fn test_batch_update_from_diff() {
        let diff = ExpandDiff {
            collapsed: Some(SectionSpan::new(0, 1)),
            expanded: Some(SectionSpan::new(3, 2)),
        };
        let update = BatchUpdate::from_diff(BatchId(7), &diff);

        assert_eq!(update.id().get(), 7);
        assert_eq!(update.deleted(), &[IndexPath::new(0, 0)]);
        assert_eq!(update.inserted(), &[IndexPath::new(3, 0), IndexPath::new(3, 1)]);
    }

    #[test]
    fn test_queue_invalidates_before_batch() {
        let mut host = CallLog::default();
        let mut queue = BatchQueue::new();
        let diff = ExpandDiff {
            collapsed: None,
            expanded: Some(SectionSpan::new(1, 3)),
        };

        let first = queue.apply(&mut host, &diff, true);
        let second = queue.apply(&mut host, &diff, false);

        assert_eq!(host.calls, vec!["invalidate", "batch -0 +3", "invalidate", "batch -0 +3"]);
        assert_eq!(queue.pending_count(), 2);
        assert_eq!(queue.finish(second), Some(false));
        assert_eq!(queue.finish(first), Some(true));
        assert_eq!(queue.finish(first), None);
        assert_eq!(queue.pending_count(), 0);
    }
}
