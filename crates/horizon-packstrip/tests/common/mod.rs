//! Shared test doubles for strip integration tests.

#![allow(dead_code)]

use horizon_packstrip::model::IndexPath;
use horizon_packstrip::view::{BatchId, BatchUpdate, ScrollAlignment, ViewHost};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once per test binary.
///
/// Honours `RUST_LOG`, e.g. `RUST_LOG=horizon_packstrip=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A command received by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Invalidate,
    Batch {
        id: BatchId,
        deleted: Vec<IndexPath>,
        inserted: Vec<IndexPath>,
    },
    ScrollToHeader(usize),
    ScrollToItem(IndexPath, ScrollAlignment),
    ReloadItems(Vec<IndexPath>),
    ReloadData,
}

/// A render host that records every command in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Returns and clears the recorded commands.
    pub fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Id of the most recent batch update.
    pub fn last_batch(&self) -> Option<BatchId> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::Batch { id, .. } => Some(*id),
            _ => None,
        })
    }
}

impl ViewHost for RecordingHost {
    fn invalidate_layout_metrics(&mut self) {
        self.calls.push(HostCall::Invalidate);
    }

    fn perform_batch_update(&mut self, update: &BatchUpdate) {
        self.calls.push(HostCall::Batch {
            id: update.id(),
            deleted: update.deleted().to_vec(),
            inserted: update.inserted().to_vec(),
        });
    }

    fn scroll_to_section_header(&mut self, section: usize, _animated: bool) {
        self.calls.push(HostCall::ScrollToHeader(section));
    }

    fn scroll_to_item(&mut self, index: IndexPath, alignment: ScrollAlignment, _animated: bool) {
        self.calls.push(HostCall::ScrollToItem(index, alignment));
    }

    fn reload_items(&mut self, items: &[IndexPath]) {
        self.calls.push(HostCall::ReloadItems(items.to_vec()));
    }

    fn reload_data(&mut self) {
        self.calls.push(HostCall::ReloadData);
    }
}

/// Index paths `(section, 0..count)`.
pub fn items(section: usize, count: usize) -> Vec<IndexPath> {
    (0..count).map(|item| IndexPath::new(section, item)).collect()
}
