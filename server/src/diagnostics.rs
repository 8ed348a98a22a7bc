//! Diagnostic sink for unmatched routes
//!
//! The fallback page records every path it is rendered for. Records are
//! kept in memory, newest last, and the oldest are dropped once the sink is
//! full.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize)]
pub struct MissedRoute {
    pub method: String,
    pub path: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct DiagnosticSink {
    capacity: usize,
    entries: RwLock<VecDeque<MissedRoute>>,
}

impl DiagnosticSink {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record an unmatched request
    pub async fn record(&self, method: impl Into<String>, path: impl Into<String>) {
        let entry = MissedRoute {
            method: method.into(),
            path: path.into(),
            recorded_at: Utc::now(),
        };
        tracing::warn!(
            method = %entry.method,
            path = %entry.path,
            "404: attempted to access non-existent route"
        );

        let mut entries = self.entries.write().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of recorded entries, oldest first
    pub async fn entries(&self) -> Vec<MissedRoute> {
        self.entries.read().await.iter().cloned().collect()
    }
}
