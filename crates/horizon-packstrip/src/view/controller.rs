//! Expand/collapse transitions between sections.
//!
//! [`ExpandCollapseController`] is the state machine at the heart of the
//! strip. It moves section focus around and reports, as an [`ExpandDiff`],
//! which item ranges disappear and which appear. It never talks to the
//! render host; applying the diff is the binding's job.

use horizon_packstrip_core::logging::targets;
use horizon_packstrip_core::StripResult;

use crate::model::{FocusState, IndexPath, SectionCatalog};

/// A section together with the number of items it shows while expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// The section.
    pub section: usize,
    /// The section's item count at the time of the transition.
    pub item_count: usize,
}

impl SectionSpan {
    /// Creates a span.
    pub const fn new(section: usize, item_count: usize) -> Self {
        Self {
            section,
            item_count,
        }
    }

    /// Index paths of every item in the span, in order.
    pub fn index_paths(&self) -> impl Iterator<Item = IndexPath> + '_ {
        (0..self.item_count).map(move |item| IndexPath::new(self.section, item))
    }
}

/// The visible-item changes produced by one focus transition.
///
/// Consumed immediately by the binding, which removes the `collapsed` range
/// and inserts the `expanded` range in a single batch update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandDiff {
    /// The section that closed, with the item count it had while open.
    pub collapsed: Option<SectionSpan>,
    /// The section that opened, with the item count it now shows.
    pub expanded: Option<SectionSpan>,
}

impl ExpandDiff {
    /// Returns whether the diff changes nothing.
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_none() && self.expanded.is_none()
    }

    /// Returns the total number of item rows removed and inserted.
    pub fn changed_item_count(&self) -> usize {
        self.collapsed.map_or(0, |span| span.item_count)
            + self.expanded.map_or(0, |span| span.item_count)
    }
}

/// Computes section-focus transitions.
///
/// Only one section can be expanded at any instant. Everything that sizes
/// headers and footers or counts visible items relies on that.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandCollapseController;

impl ExpandCollapseController {
    /// Toggles `section`.
    ///
    /// - If `section` is expanded, it collapses and nothing is expanded.
    /// - Otherwise the expanded section (if any) collapses and `section`
    ///   expands.
    ///
    /// Item counts in the returned diff are read before focus changes. When
    /// the selected item ends up outside the expanded section, the selection
    /// is dropped.
    ///
    /// Sections with zero or one item expand like any other; see
    /// [`is_section_expandable`](Self::is_section_expandable).
    ///
    /// # Errors
    ///
    /// Returns [`StripError::SectionOutOfRange`](horizon_packstrip_core::StripError::SectionOutOfRange)
    /// if `section` does not exist. Focus is left untouched in that case.
    pub fn toggle<C>(
        focus: &mut FocusState,
        catalog: &C,
        section: usize,
    ) -> StripResult<ExpandDiff>
    where
        C: SectionCatalog + ?Sized,
    {
        let item_count = catalog.checked_item_count(section).inspect_err(|err| {
            tracing::error!(target: targets::CONTROLLER, %err, "rejected section toggle");
        })?;

        let previous = focus.focused_section();
        let collapsed = previous.map(|prev| {
            let count = if prev == section {
                item_count
            } else {
                catalog.item_count(prev)
            };
            SectionSpan::new(prev, count)
        });
        let expanded = (previous != Some(section)).then(|| SectionSpan::new(section, item_count));

        focus.set_focused_section(expanded.map(|span| span.section));
        if let Some(item) = focus.focused_item()
            && focus.focused_section() != Some(item.section())
        {
            focus.set_focused_item(None);
            tracing::trace!(target: targets::CONTROLLER, %item, "selection left the expanded section");
        }

        tracing::debug!(
            target: targets::CONTROLLER,
            section,
            ?previous,
            focused = ?focus.focused_section(),
            "toggled section"
        );

        Ok(ExpandDiff {
            collapsed,
            expanded,
        })
    }

    /// Expands `section` unless it is already expanded.
    ///
    /// Returns `None` when nothing had to change.
    ///
    /// # Errors
    ///
    /// Same as [`toggle`](Self::toggle).
    pub fn expand<C>(
        focus: &mut FocusState,
        catalog: &C,
        section: usize,
    ) -> StripResult<Option<ExpandDiff>>
    where
        C: SectionCatalog + ?Sized,
    {
        if focus.is_section_focused(section) {
            catalog.checked_item_count(section)?;
            return Ok(None);
        }
        Self::toggle(focus, catalog, section).map(Some)
    }

    /// Returns whether `section` has more than one item.
    ///
    /// Not consulted by [`toggle`](Self::toggle): single-item and empty
    /// sections still expand.
    pub fn is_section_expandable<C>(catalog: &C, section: usize) -> bool
    where
        C: SectionCatalog + ?Sized,
    {
        section < catalog.section_count() && catalog.item_count(section) > 1
    }
}
