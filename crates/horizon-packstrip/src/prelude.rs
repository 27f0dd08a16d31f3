//! Prelude module for Horizon Packstrip.
//!
//! ```ignore
//! use horizon_packstrip::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use horizon_packstrip_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use horizon_packstrip_core::{StripError, StripResult};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    CellContent, FocusState, HeaderContent, IndexPath, Pack, PackCatalog, PackItem, SectionCatalog,
};

// ============================================================================
// Widget
// ============================================================================

pub use crate::config::{Size, StripConfig};
pub use crate::strip::ExpandableStrip;
pub use crate::view::{BatchId, BatchUpdate, ScrollAlignment, ScrollDriver, ViewHost};
