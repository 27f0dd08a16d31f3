//! Leading-section tracking while the user scrolls.

use horizon_packstrip_core::logging::targets;
use horizon_packstrip_core::Signal;

/// What is moving the strip's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDriver {
    /// The user is dragging the content.
    Dragging,
    /// The content is coasting after the user let go.
    Decelerating,
    /// The strip itself requested the scroll.
    Programmatic,
}

impl ScrollDriver {
    /// Returns whether the motion comes from the user.
    pub fn is_user_driven(self) -> bool {
        matches!(self, Self::Dragging | Self::Decelerating)
    }
}

/// Tracks which section's header is leftmost during user scrolling.
///
/// Independent of expand/collapse: the leading section is only reported to
/// observers and never drives focus. Programmatic scrolls (the ones the
/// strip issues after a toggle or a selection) are ignored, so reacting to
/// a notification can never feed back into another one.
///
/// # Signals
///
/// - `leading_section_changed(Option<usize>)`: Emitted when the leftmost
///   visible header changes; `None` when no header is visible
#[derive(Debug, Default)]
pub struct ScrollCoordinator {
    leading_section: Option<usize>,

    /// Emitted when the leading section changes.
    pub leading_section_changed: Signal<Option<usize>>,
}

impl ScrollCoordinator {
    /// Creates a coordinator with no leading section recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last leading section reported.
    pub fn leading_section(&self) -> Option<usize> {
        self.leading_section
    }

    /// Handles a scroll position update.
    ///
    /// `visible_headers` lists the sections whose headers are currently on
    /// screen, in any order. Returns `true` if the leading section changed
    /// (and the signal was emitted).
    pub fn on_scroll_position_changed<I>(&mut self, driver: ScrollDriver, visible_headers: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        if !driver.is_user_driven() {
            return false;
        }

        let leading = visible_headers.into_iter().min();
        if leading == self.leading_section {
            return false;
        }

        tracing::debug!(
            target: targets::SCROLL,
            previous = ?self.leading_section,
            current = ?leading,
            "leading section changed"
        );
        self.leading_section = leading;
        self.leading_section_changed.emit(leading);
        true
    }
}
