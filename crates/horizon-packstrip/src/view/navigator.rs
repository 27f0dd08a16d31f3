//! Item selection and next/previous navigation across sections.

use horizon_packstrip_core::logging::targets;
use horizon_packstrip_core::{StripError, StripResult};

use crate::model::{FocusState, IndexPath, SectionCatalog};

use super::controller::{ExpandCollapseController, ExpandDiff};

/// The outcome of a successful selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionMove {
    /// The item that was selected before the move.
    pub previous: Option<IndexPath>,
    /// The item that is selected now.
    pub current: IndexPath,
    /// The expand/collapse transition the move needed, if it crossed into a
    /// collapsed section.
    pub diff: Option<ExpandDiff>,
}

/// Computes selection targets and applies them to a [`FocusState`].
///
/// Moving past the end of a section continues in the neighbouring section,
/// which is expanded (collapsing the current one) on the way. Sections with
/// no items are skipped since they have nothing to select. At either end of
/// the catalog the navigator stops and reports no move.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionNavigator;

impl SelectionNavigator {
    /// Selects the item after the current one.
    ///
    /// With nothing selected, selects the first item of the first non-empty
    /// section. Returns `Ok(None)` at the last item of the last non-empty
    /// section.
    ///
    /// # Errors
    ///
    /// Fails if the current selection no longer fits the catalog.
    pub fn select_next<C>(focus: &mut FocusState, catalog: &C) -> StripResult<Option<SelectionMove>>
    where
        C: SectionCatalog + ?Sized,
    {
        let Some(current) = focus.focused_item() else {
            return Self::select_first(focus, catalog);
        };
        catalog.check_index(current).inspect_err(|err| {
            tracing::error!(target: targets::NAVIGATOR, %err, %current, "selection no longer fits the catalog");
        })?;

        if current.item() + 1 < catalog.item_count(current.section()) {
            return Self::move_to(focus, catalog, current.with_item(current.item() + 1)).map(Some);
        }

        let next_section = (current.section() + 1..catalog.section_count())
            .find(|&section| catalog.item_count(section) > 0);
        match next_section {
            Some(section) => Self::move_to(focus, catalog, IndexPath::new(section, 0)).map(Some),
            None => {
                tracing::trace!(target: targets::NAVIGATOR, %current, "already at the last item");
                Ok(None)
            }
        }
    }

    /// Selects the item before the current one.
    ///
    /// With nothing selected, behaves like [`select_next`](Self::select_next).
    /// Crossing into an earlier section selects that section's last item.
    /// Returns `Ok(None)` at the first item of the first non-empty section.
    ///
    /// # Errors
    ///
    /// Fails if the current selection no longer fits the catalog.
    pub fn select_previous<C>(
        focus: &mut FocusState,
        catalog: &C,
    ) -> StripResult<Option<SelectionMove>>
    where
        C: SectionCatalog + ?Sized,
    {
        let Some(current) = focus.focused_item() else {
            return Self::select_first(focus, catalog);
        };
        catalog.check_index(current).inspect_err(|err| {
            tracing::error!(target: targets::NAVIGATOR, %err, %current, "selection no longer fits the catalog");
        })?;

        if current.item() > 0 {
            return Self::move_to(focus, catalog, current.with_item(current.item() - 1)).map(Some);
        }

        let previous_section = (0..current.section())
            .rev()
            .map(|section| (section, catalog.item_count(section)))
            .find(|&(_, count)| count > 0);
        match previous_section {
            Some((section, count)) => {
                Self::move_to(focus, catalog, IndexPath::new(section, count - 1)).map(Some)
            }
            None => {
                tracing::trace!(target: targets::NAVIGATOR, %current, "already at the first item");
                Ok(None)
            }
        }
    }

    /// Selects `index` directly, as a tap on a visible cell does.
    ///
    /// Never expands or collapses anything.
    ///
    /// # Errors
    ///
    /// Fails if `index` does not exist or its section is not expanded.
    pub fn select_index_path<C>(
        focus: &mut FocusState,
        catalog: &C,
        index: IndexPath,
    ) -> StripResult<SelectionMove>
    where
        C: SectionCatalog + ?Sized,
    {
        let checked = catalog.check_index(index).and_then(|()| {
            if focus.is_section_focused(index.section()) {
                Ok(())
            } else {
                Err(StripError::SectionCollapsed {
                    section: index.section(),
                    item: index.item(),
                })
            }
        });
        if let Err(err) = checked {
            tracing::error!(target: targets::NAVIGATOR, %err, %index, "rejected item selection");
            return Err(err);
        }

        let previous = focus.set_focused_item(Some(index));
        tracing::debug!(target: targets::NAVIGATOR, ?previous, %index, "selected item");
        Ok(SelectionMove {
            previous,
            current: index,
            diff: None,
        })
    }

    fn select_first<C>(focus: &mut FocusState, catalog: &C) -> StripResult<Option<SelectionMove>>
    where
        C: SectionCatalog + ?Sized,
    {
        let first = (0..catalog.section_count()).find(|&section| catalog.item_count(section) > 0);
        match first {
            Some(section) => Self::move_to(focus, catalog, IndexPath::new(section, 0)).map(Some),
            None => {
                tracing::trace!(target: targets::NAVIGATOR, "no items to select");
                Ok(None)
            }
        }
    }

    /// Expands the target's section if needed, then selects the target.
    fn move_to<C>(focus: &mut FocusState, catalog: &C, target: IndexPath) -> StripResult<SelectionMove>
    where
        C: SectionCatalog + ?Sized,
    {
        let previous = focus.focused_item();
        let diff = ExpandCollapseController::expand(focus, catalog, target.section())?;
        focus.set_focused_item(Some(target));

        tracing::debug!(
            target: targets::NAVIGATOR,
            ?previous,
            current = %target,
            crossed_section = diff.is_some(),
            "moved selection"
        );
        Ok(SelectionMove {
            previous,
            current: target,
            diff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackCatalog;
    use crate::view::controller::SectionSpan;

    fn walk_forward(catalog: &PackCatalog, focus: &mut FocusState) -> Vec<IndexPath> {
        let mut visited = Vec::new();
        while let Some(step) = SelectionNavigator::select_next(focus, catalog).unwrap() {
            visited.push(step.current);
            assert!(focus.is_consistent());
        }
        visited
    }

    #[test]
    fn test_select_next_walks_all_items() {
        let catalog = PackCatalog::from_counts(&[1, 3, 5]);
        let mut focus = FocusState::new();

        let visited = walk_forward(&catalog, &mut focus);

        let expected: Vec<IndexPath> = [(0, 0), (1, 0), (1, 1), (1, 2)]
            .into_iter()
            .chain((0..5).map(|item| (2, item)))
            .map(IndexPath::from)
            .collect();
        assert_eq!(visited, expected);
        assert_eq!(focus.focused_item(), Some(IndexPath::new(2, 4)));
        assert_eq!(focus.focused_section(), Some(2));
    }

    #[test]
    fn test_select_previous_is_inverse_walk() {
        let catalog = PackCatalog::from_counts(&[1, 3, 5]);
        let mut focus = FocusState::new();
        let mut forward = walk_forward(&catalog, &mut focus);

        let mut backward = vec![focus.focused_item().unwrap()];
        while let Some(step) = SelectionNavigator::select_previous(&mut focus, &catalog).unwrap() {
            backward.push(step.current);
            assert!(focus.is_consistent());
        }

        forward.reverse();
        assert_eq!(backward, forward);
        assert_eq!(focus.focused_item(), Some(IndexPath::new(0, 0)));
        assert_eq!(focus.focused_section(), Some(0));
    }

    #[test]
    fn test_first_selection_expands_section_zero() {
        let catalog = PackCatalog::from_counts(&[2, 2]);
        let mut focus = FocusState::new();

        let step = SelectionNavigator::select_previous(&mut focus, &catalog)
            .unwrap()
            .unwrap();
        assert_eq!(step.current, IndexPath::new(0, 0));
        assert_eq!(step.previous, None);
        assert_eq!(
            step.diff,
            Some(ExpandDiff {
                collapsed: None,
                expanded: Some(SectionSpan::new(0, 2)),
            })
        );
    }

    #[test]
    fn test_first_selection_keeps_expanded_section_zero() {
        let catalog = PackCatalog::from_counts(&[2, 2]);
        let mut focus = FocusState::new();
        ExpandCollapseController::toggle(&mut focus, &catalog, 0).unwrap();

        let step = SelectionNavigator::select_next(&mut focus, &catalog)
            .unwrap()
            .unwrap();
        assert_eq!(step.current, IndexPath::new(0, 0));
        assert_eq!(step.diff, None);
        assert_eq!(focus.focused_section(), Some(0));
    }

    #[test]
    fn test_crossing_sections_collapses_current() {
        let catalog = PackCatalog::from_counts(&[1, 3]);
        let mut focus = FocusState::new();
        SelectionNavigator::select_next(&mut focus, &catalog).unwrap();

        let step = SelectionNavigator::select_next(&mut focus, &catalog)
            .unwrap()
            .unwrap();
        assert_eq!(step.previous, Some(IndexPath::new(0, 0)));
        assert_eq!(
            step.diff,
            Some(ExpandDiff {
                collapsed: Some(SectionSpan::new(0, 1)),
                expanded: Some(SectionSpan::new(1, 3)),
            })
        );
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let catalog = PackCatalog::from_counts(&[0, 2, 0, 0, 1, 0]);
        let mut focus = FocusState::new();

        let visited = walk_forward(&catalog, &mut focus);
        assert_eq!(
            visited,
            vec![
                IndexPath::new(1, 0),
                IndexPath::new(1, 1),
                IndexPath::new(4, 0)
            ]
        );

        let step = SelectionNavigator::select_previous(&mut focus, &catalog)
            .unwrap()
            .unwrap();
        assert_eq!(step.current, IndexPath::new(1, 1));
    }

    #[test]
    fn test_empty_catalog_is_noop() {
        let catalog = PackCatalog::from_counts(&[]);
        let mut focus = FocusState::new();

        assert_eq!(SelectionNavigator::select_next(&mut focus, &catalog), Ok(None));
        assert_eq!(SelectionNavigator::select_previous(&mut focus, &catalog), Ok(None));
        assert_eq!(focus, FocusState::new());
    }

    #[test]
    fn test_select_index_path_requires_expanded_section() {
        let catalog = PackCatalog::from_counts(&[1, 3, 5]);
        let mut focus = FocusState::new();

        assert_eq!(
            SelectionNavigator::select_index_path(&mut focus, &catalog, IndexPath::new(1, 1)),
            Err(StripError::SectionCollapsed {
                section: 1,
                item: 1
            })
        );

        ExpandCollapseController::toggle(&mut focus, &catalog, 1).unwrap();
        let step =
            SelectionNavigator::select_index_path(&mut focus, &catalog, IndexPath::new(1, 1))
                .unwrap();
        assert_eq!(step.previous, None);
        assert_eq!(focus.focused_item(), Some(IndexPath::new(1, 1)));

        assert!(matches!(
            SelectionNavigator::select_index_path(&mut focus, &catalog, IndexPath::new(1, 3)),
            Err(StripError::ItemOutOfRange { .. })
        ));
        assert_eq!(focus.focused_item(), Some(IndexPath::new(1, 1)));
    }
}
