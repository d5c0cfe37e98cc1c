//! Edit history of an editor session

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::PortfolioConfig;

/// Snapshot of the configuration taken after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Time-ordered unique id
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub config: Arc<PortfolioConfig>,
    pub description: String,
}

impl HistoryEntry {
    pub fn new(config: Arc<PortfolioConfig>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            timestamp: Utc::now(),
            config,
            description: description.into(),
        }
    }

    /// Timestamp as RFC 3339 with millisecond precision
    pub fn timestamp_label(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Entries ordered most recent first
///
/// With a limit set, pushing past it evicts the oldest entry.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: Option<usize>,
}

impl History {
    /// Create a history keeping at most `limit` entries (`None` keeps all)
    ///
    /// A limit of zero is raised to one so the latest edit is always kept.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.map(|n| n.max(1)),
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if let Some(limit) = self.limit {
            self.entries.truncate(limit);
        }
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry `steps_back` edits ago (0 is the latest)
    pub fn get(&self, steps_back: usize) -> Option<&HistoryEntry> {
        self.entries.get(steps_back)
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
