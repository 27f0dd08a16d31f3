//! Error types for Horizon Packstrip.

use thiserror::Error;

/// Contract violations detected by the strip's state machine.
///
/// Indices handed to the strip are expected to come from the catalog's own
/// counts. A value outside those bounds is a caller bug, so it is reported
/// before any state is touched instead of being clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// A section index outside `0..section_count`.
    #[error("section {section} is out of range (section count is {section_count})")]
    SectionOutOfRange { section: usize, section_count: usize },

    /// An item index outside `0..item_count` of its section.
    #[error("item {item} of section {section} is out of range (item count is {item_count})")]
    ItemOutOfRange {
        section: usize,
        item: usize,
        item_count: usize,
    },

    /// An item was selected directly while its section is collapsed.
    #[error("section {section} is collapsed; expand it before selecting item {item}")]
    SectionCollapsed { section: usize, item: usize },
}

/// Result type for strip operations.
pub type StripResult<T> = Result<T, StripError>;
