//! Search state machine states

use crate::api::{ResultEnvelope, VideoMetadata};
use std::sync::Arc;

/// Identifies one issued search; completions carry it back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub keyword: String,
}

/// Search lifecycle: `Idle -> Searching -> Succeeded | Failed`
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching(SearchTicket),
    Succeeded(Arc<ResultEnvelope>),
    Failed(Arc<ResultEnvelope>),
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching(_))
    }

    /// The last completed envelope, if the state holds one
    pub fn envelope(&self) -> Option<&ResultEnvelope> {
        match self {
            SearchState::Succeeded(envelope) | SearchState::Failed(envelope) => {
                Some(envelope.as_ref())
            }
            _ => None,
        }
    }

    /// Loaded video; only present after a successful search
    pub fn video(&self) -> Option<&VideoMetadata> {
        match self {
            SearchState::Succeeded(envelope) => envelope.video(),
            _ => None,
        }
    }
}
