//! The expandable strip widget.
//!
//! [`ExpandableStrip`] ties the section model, the focus state machine and a
//! render host together. Input events (header taps, cell taps, scroll
//! updates, keyboard or programmatic navigation) go in; render commands go
//! out to the [`ViewHost`] and notifications go out through signals.
//!
//! # Example
//!
//! ```
//! use horizon_packstrip::model::{IndexPath, PackCatalog};
//! use horizon_packstrip::ExpandableStrip;
//!
//! let catalog = PackCatalog::from_counts(&[1, 3, 5]);
//! let mut strip = ExpandableStrip::new(catalog, ());
//!
//! strip.item_selected.connect(|index| {
//!     println!("selected {index}");
//! });
//!
//! strip.on_header_tapped(1).unwrap();
//! assert_eq!(strip.focused_section(), Some(1));
//!
//! strip.select_index_path(IndexPath::new(1, 0)).unwrap();
//! strip.select_next(true).unwrap();
//! assert_eq!(strip.focused_item(), Some(IndexPath::new(1, 1)));
//! ```

use horizon_packstrip_core::logging::targets;
use horizon_packstrip_core::{Signal, StripResult};

use crate::config::StripConfig;
use crate::model::{FocusState, IndexPath, SectionCatalog};
use crate::view::{
    BatchId, BatchQueue, ExpandCollapseController, ExpandDiff, ScrollCoordinator, ScrollDriver,
    SelectionMove, SelectionNavigator, ViewBindingAdapter, ViewHost,
};

/// A horizontally scrolling strip of sections that expand one at a time.
///
/// Every section shows a header. Tapping a header expands that section,
/// revealing its items and a trailing footer, and collapses whichever
/// section was expanded before. Tapping the expanded header again collapses
/// it. Inside the expanded section one item can be selected; moving the
/// selection past either end of a section continues into the neighbouring
/// section, expanding it on the way.
///
/// Focus state is always updated before any render command is issued, so
/// an event arriving while the host is still animating sees the new state.
///
/// # Signals
///
/// - `section_focus_changed(Option<usize>)`: Emitted when a different
///   section (or none) becomes expanded
/// - `item_selected(IndexPath)`: Emitted after every successful selection,
///   tapped or programmatic
/// - `leading_section_changed(Option<usize>)`: Emitted when the leftmost
///   visible header changes during user scrolling; see
///   [`leading_section_changed`](Self::leading_section_changed)
#[derive(Debug)]
pub struct ExpandableStrip<C, H = ()> {
    /// Sections and items.
    catalog: C,

    /// Render host receiving commands.
    host: H,

    /// Sizes and scrolling behaviour.
    config: StripConfig,

    /// Expanded section and selected item.
    focus: FocusState,

    /// Leading-section tracking.
    scroll: ScrollCoordinator,

    /// Batch updates the host has not finished yet.
    batches: BatchQueue,

    /// Signal emitted when the expanded section changes.
    pub section_focus_changed: Signal<Option<usize>>,

    /// Signal emitted when an item is selected.
    pub item_selected: Signal<IndexPath>,
}

impl<C: SectionCatalog, H: ViewHost> ExpandableStrip<C, H> {
    /// Creates a fully collapsed strip with the default configuration.
    pub fn new(catalog: C, host: H) -> Self {
        Self::with_config(catalog, host, StripConfig::default())
    }

    /// Creates a fully collapsed strip.
    pub fn with_config(catalog: C, host: H, config: StripConfig) -> Self {
        tracing::debug!(
            target: targets::STRIP,
            sections = catalog.section_count(),
            "created strip"
        );
        Self {
            catalog,
            host,
            config,
            focus: FocusState::new(),
            scroll: ScrollCoordinator::new(),
            batches: BatchQueue::new(),
            section_focus_changed: Signal::new(),
            item_selected: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Replaces the catalog and reloads the strip.
    ///
    /// Focus survives only where it still fits the new catalog; see
    /// [`reload_data`](Self::reload_data).
    pub fn set_catalog(&mut self, catalog: C) {
        self.catalog = catalog;
        self.reload_data();
    }

    /// Returns the render host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the render host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Header and footer sizes may change, so the host's cached layout
    /// metrics are invalidated.
    pub fn set_config(&mut self, config: StripConfig) {
        if self.config != config {
            self.config = config;
            self.host.invalidate_layout_metrics();
        }
    }

    /// Returns the focus state.
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Returns the expanded section, if any.
    pub fn focused_section(&self) -> Option<usize> {
        self.focus.focused_section()
    }

    /// Returns the selected item, if any.
    pub fn focused_item(&self) -> Option<IndexPath> {
        self.focus.focused_item()
    }

    /// Returns the section whose header was leftmost after the last user
    /// scroll.
    pub fn leading_section(&self) -> Option<usize> {
        self.scroll.leading_section()
    }

    /// Signal emitted when the leading section changes.
    pub fn leading_section_changed(&self) -> &Signal<Option<usize>> {
        &self.scroll.leading_section_changed
    }

    /// Returns the layout and content queries for the render host.
    pub fn binding(&self) -> ViewBindingAdapter<'_, C> {
        ViewBindingAdapter::new(&self.catalog, &self.focus, &self.config)
    }

    /// Returns the number of batch updates still animating.
    pub fn pending_batch_count(&self) -> usize {
        self.batches.pending_count()
    }

    // =========================================================================
    // Expand / Collapse
    // =========================================================================

    /// Handles a tap on the header of `section`.
    ///
    /// Toggles the section and, if configured, scrolls its header into
    /// place once the host has finished the batch update.
    ///
    /// # Errors
    ///
    /// Fails if `section` does not exist; nothing changes in that case.
    pub fn on_header_tapped(&mut self, section: usize) -> StripResult<ExpandDiff> {
        self.toggle_section(section, self.config.scroll_to_header_on_expand)
    }

    /// Toggles `section` and issues the matching batch update.
    ///
    /// With `scroll_to` set, the header of whichever section is expanded
    /// when the batch finishes is scrolled to the leading edge.
    ///
    /// # Errors
    ///
    /// Fails if `section` does not exist; nothing changes in that case.
    pub fn toggle_section(&mut self, section: usize, scroll_to: bool) -> StripResult<ExpandDiff> {
        let diff = ExpandCollapseController::toggle(&mut self.focus, &self.catalog, section)?;
        self.batches.apply(&mut self.host, &diff, scroll_to);
        self.section_focus_changed.emit(self.focus.focused_section());
        Ok(diff)
    }

    /// Reports that the host finished animating batch `id`.
    ///
    /// Issues the header scroll the batch asked for, if any. Unknown ids are
    /// ignored.
    pub fn on_batch_update_finished(&mut self, id: BatchId) {
        if self.batches.finish(id) != Some(true) {
            return;
        }
        if let Some(section) = self.focus.focused_section() {
            tracing::debug!(target: targets::STRIP, %id, section, "scrolling to expanded header");
            self.host
                .scroll_to_section_header(section, self.config.animate_scrolling);
        }
    }

    /// Scrolls the header of `section` to the leading edge.
    ///
    /// # Errors
    ///
    /// Fails if `section` does not exist.
    pub fn scroll_to_section(&mut self, section: usize, animated: bool) -> StripResult<()> {
        self.catalog.checked_item_count(section).inspect_err(|err| {
            tracing::error!(target: targets::STRIP, %err, "rejected header scroll");
        })?;
        self.host.scroll_to_section_header(section, animated);
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects the next item, crossing into the next section if needed.
    ///
    /// Returns the new selection, or `None` if the last item was already
    /// selected. With `scroll_to` set, the new item is scrolled into view.
    ///
    /// # Errors
    ///
    /// Fails if the current selection no longer fits the catalog.
    pub fn select_next(&mut self, scroll_to: bool) -> StripResult<Option<IndexPath>> {
        let step = SelectionNavigator::select_next(&mut self.focus, &self.catalog)?;
        Ok(step.map(|step| self.commit_move(step, scroll_to)))
    }

    /// Selects the previous item, crossing into the previous section if
    /// needed.
    ///
    /// Returns the new selection, or `None` if the first item was already
    /// selected. With `scroll_to` set, the new item is scrolled into view.
    ///
    /// # Errors
    ///
    /// Fails if the current selection no longer fits the catalog.
    pub fn select_previous(&mut self, scroll_to: bool) -> StripResult<Option<IndexPath>> {
        let step = SelectionNavigator::select_previous(&mut self.focus, &self.catalog)?;
        Ok(step.map(|step| self.commit_move(step, scroll_to)))
    }

    /// Handles a tap on the cell at `index` and scrolls it into view.
    ///
    /// # Errors
    ///
    /// Fails if `index` does not exist or its section is collapsed, which
    /// means no such cell is on screen.
    pub fn select_index_path(&mut self, index: IndexPath) -> StripResult<()> {
        let step = SelectionNavigator::select_index_path(&mut self.focus, &self.catalog, index)?;
        self.commit_move(step, true);
        Ok(())
    }

    /// Renders a selection change and notifies observers.
    fn commit_move(&mut self, step: SelectionMove, scroll_to: bool) -> IndexPath {
        let inserted_section = step.diff.and_then(|diff| diff.expanded).map(|span| span.section);
        if let Some(diff) = &step.diff {
            self.batches.apply(&mut self.host, diff, false);
            self.section_focus_changed.emit(self.focus.focused_section());
        }

        // Cells of a collapsed section are gone and cells of a freshly
        // inserted one are already drawn with the new selection.
        let reload: Vec<IndexPath> = step
            .previous
            .filter(|&previous| previous != step.current)
            .into_iter()
            .chain([step.current])
            .filter(|index| {
                self.focus.is_section_focused(index.section())
                    && inserted_section != Some(index.section())
            })
            .collect();
        if !reload.is_empty() {
            self.host.reload_items(&reload);
        }

        if scroll_to {
            self.host.scroll_to_item(
                step.current,
                self.config.selected_item_alignment,
                self.config.animate_scrolling,
            );
        }

        self.item_selected.emit(step.current);
        step.current
    }

    // =========================================================================
    // Scrolling / Reload
    // =========================================================================

    /// Handles a scroll position update from the host.
    ///
    /// `visible_headers` lists the sections whose headers are on screen.
    /// Returns whether the leading section changed.
    pub fn on_scroll<I>(&mut self, driver: ScrollDriver, visible_headers: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        self.scroll.on_scroll_position_changed(driver, visible_headers)
    }

    /// Re-reads the catalog and has the host redraw everything.
    ///
    /// The expanded section stays expanded if it still exists, and the
    /// selection survives if it still addresses an item; otherwise they are
    /// cleared. Pending batches are forgotten, so their header scrolls
    /// never happen.
    pub fn reload_data(&mut self) {
        let previous_section = self.focus.focused_section();
        if previous_section.is_some_and(|section| section >= self.catalog.section_count()) {
            self.focus.clear();
        } else if let Some(index) = self.focus.focused_item()
            && self.catalog.check_index(index).is_err()
        {
            self.focus.set_focused_item(None);
        }

        self.batches.clear();
        tracing::debug!(
            target: targets::STRIP,
            sections = self.catalog.section_count(),
            focused = ?self.focus.focused_section(),
            selected = ?self.focus.focused_item(),
            "reloading strip"
        );
        self.host.reload_data();

        if self.focus.focused_section() != previous_section {
            self.section_focus_changed.emit(self.focus.focused_section());
        }
    }
}

// Ensure ExpandableStrip is Send + Sync
static_assertions::assert_impl_all!(ExpandableStrip<crate::model::PackCatalog>: Send, Sync);
