//! Section model for Horizon Packstrip.
//!
//! # Core Types
//!
//! - [`SectionCatalog`]: The data source trait: section/item counts and
//!   header/cell display data
//! - [`PackCatalog`]: A ready-made catalog over owned [`Pack`]s
//! - [`IndexPath`]: Addresses one item of one section
//! - [`FocusState`]: The expanded section and the selected item
//!
//! # Example
//!
//! ```
//! use horizon_packstrip::model::{CellContent, IndexPath, PackCatalog, SectionCatalog};
//!
//! let catalog = PackCatalog::from_counts(&[1, 3, 5]);
//!
//! let mut cell = CellContent::default();
//! catalog.populate_cell(IndexPath::new(1, 2), &mut cell);
//! assert_eq!(cell.text, "Item 3");
//! ```

mod catalog;
mod focus;
mod index;

pub use catalog::{CellContent, HeaderContent, Pack, PackCatalog, PackItem, SectionCatalog};
pub use focus::FocusState;
pub use index::IndexPath;
