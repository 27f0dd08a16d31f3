//! Focus transitions and their translation into render-host calls.
//!
//! # Core Types
//!
//! - [`ExpandCollapseController`]: Section expand/collapse transitions
//! - [`SelectionNavigator`]: Next/previous item selection across sections
//! - [`ScrollCoordinator`]: Leading-section tracking during user scrolling
//! - [`ViewBindingAdapter`]: Layout and content queries from the render host
//! - [`ViewHost`]: The commands a render host executes
//!
//! These pieces are usually driven together through
//! [`ExpandableStrip`](crate::ExpandableStrip), but each can be used alone.

mod binding;
mod controller;
mod navigator;
mod scroll;

pub use binding::{BatchId, BatchQueue, BatchUpdate, ScrollAlignment, ViewBindingAdapter, ViewHost};
pub use controller::{ExpandCollapseController, ExpandDiff, SectionSpan};
pub use navigator::{SelectionMove, SelectionNavigator};
pub use scroll::{ScrollCoordinator, ScrollDriver};
