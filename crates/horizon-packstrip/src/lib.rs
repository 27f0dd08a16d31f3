//! Horizon Packstrip - a horizontally scrolling strip of expandable sections.
//!
//! Sections ("packs") sit side by side, each represented by a header. Tapping
//! a header expands its section to reveal the items inside; only one section
//! is ever expanded, so expanding one collapses the other. Selection moves
//! item by item and flows across section boundaries.
//!
//! This crate owns the state machine and the update protocol. Drawing is left
//! to a render host implementing [`ViewHost`].
//!
//! # Example
//!
//! ```
//! use horizon_packstrip::prelude::*;
//!
//! let catalog = PackCatalog::from_counts(&[1, 3, 5]);
//! let mut strip = ExpandableStrip::new(catalog, ());
//!
//! let mut visited = Vec::new();
//! while let Some(index) = strip.select_next(false).unwrap() {
//!     visited.push(index);
//! }
//! assert_eq!(visited.len(), 9);
//! assert_eq!(strip.focused_section(), Some(2));
//! ```

pub use horizon_packstrip_core::*;

pub mod config;
pub mod model;
pub mod prelude;
pub mod view;

mod strip;

pub use config::{ConfigError, ConfigResult, Size, StripConfig};
pub use strip::ExpandableStrip;
pub use view::ViewHost;
