use std::sync::mpsc;

use crate::model::config::ViewConfig;
use crate::model::snapshot::Snapshot;
use crate::timeline::{self, ProjectionResult};

/// A handle the store side uses to publish fresh snapshots.
pub type SnapshotSender = mpsc::Sender<Snapshot>;

/// Subscribe-on-change driver around the projection.
///
/// The store pushes a complete snapshot through a `SnapshotSender` after
/// every mutation; the host calls `poll()` each tick and republishes the
/// result to its rendering surface. Snapshots are never diffed or merged:
/// when several arrive between polls, only the newest is projected.
pub struct ProjectionEngine {
    config: ViewConfig,
    tx: mpsc::Sender<Snapshot>,
    rx: mpsc::Receiver<Snapshot>,
    latest: Option<ProjectionResult>,
}

impl ProjectionEngine {
    /// Create an engine with the given view configuration.
    pub fn new(config: ViewConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        ProjectionEngine {
            config,
            tx,
            rx,
            latest: None,
        }
    }

    /// A sender for the store side. May be cloned freely.
    pub fn feed(&self) -> SnapshotSender {
        self.tx.clone()
    }

    /// Non-blocking poll for pending snapshots.
    /// Drains the queue, recomputes on the newest snapshot only, and
    /// returns the fresh result; `None` when nothing arrived.
    pub fn poll(&mut self) -> Option<&ProjectionResult> {
        let mut newest = None;
        while let Ok(snapshot) = self.rx.try_recv() {
            newest = Some(snapshot);
        }
        let snapshot = newest?;
        Some(self.refresh(&snapshot))
    }

    /// Recompute synchronously for one snapshot.
    pub fn refresh(&mut self, snapshot: &Snapshot) -> &ProjectionResult {
        let result = timeline::project(snapshot, &self.config);
        log::debug!(
            "projected {} rows ({}px) from snapshot taken at {}",
            result.rows.len(),
            result.height,
            snapshot.taken_at
        );
        self.latest.insert(result)
    }

    /// The most recent result, if any snapshot has been projected yet.
    pub fn latest(&self) -> Option<&ProjectionResult> {
        self.latest.as_ref()
    }

    /// The view configuration this engine projects with.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }
}
