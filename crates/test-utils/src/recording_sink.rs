use std::sync::{Arc, Mutex};
use std::time::Duration;

use dag_traveler::engine::{TraversalEvent, VisitSink};

/// A sink that:
/// - records every event in emission order
/// - can be cloned; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<TraversalEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraversalEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Visited node ids in emission order (the `Done` event is skipped).
    pub fn visited(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|e| e.node().map(str::to_string))
            .collect()
    }

    /// `(node, elapsed)` per visit, in emission order.
    pub fn timeline(&self) -> Vec<(String, Duration)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                TraversalEvent::Visited { node, elapsed, .. } => Some((node, elapsed)),
                TraversalEvent::Done { .. } => None,
            })
            .collect()
    }

    pub fn is_done(&self) -> bool {
        self.events()
            .last()
            .is_some_and(|e| matches!(e, TraversalEvent::Done { .. }))
    }
}

impl VisitSink for RecordingSink {
    fn notify(&self, event: TraversalEvent) {
        let mut guard = self.events.lock().unwrap();
        guard.push(event);
    }
}
