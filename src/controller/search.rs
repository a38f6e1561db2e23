//! Search controller
//!
//! Owns the keyword input, the current query and the current result. All
//! changes go through the transition methods below; views only read.

use crate::api::{ResultEnvelope, VideoMetadata};
use crate::controller::state::{SearchState, SearchTicket};
use crate::query::{self, SearchQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub struct SearchController {
    input: String,
    query: SearchQuery,
    state: SearchState,
    /// Sequence number of the most recently issued search
    last_issued: u64,
    share_base: Url,
    share_link: Option<Url>,
}

impl SearchController {
    pub fn new(share_base: Url) -> Self {
        Self {
            input: String::new(),
            query: SearchQuery::default(),
            state: SearchState::Idle,
            last_issued: 0,
            share_base,
            share_link: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Link that reproduces the current search, once one has been issued
    pub fn share_link(&self) -> Option<&Url> {
        self.share_link.as_ref()
    }

    pub fn current_video(&self) -> Option<&VideoMetadata> {
        self.state.video()
    }

    /// Point share links at a different server, e.g. after a settings change
    pub fn set_share_base(&mut self, base: Url) {
        self.share_base = base;
        if self.share_link.is_some() {
            self.share_link = Some(query::share_link(&self.share_base, &self.query));
        }
    }

    /// Explicit submission of the input box. A blank keyword does nothing.
    ///
    /// Submitting while a search is running is allowed; the earlier one is
    /// superseded and its response will be discarded.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        let keyword = self.input.trim().to_string();
        if keyword.is_empty() {
            debug!("Ignoring submit with empty keyword");
            return None;
        }
        self.input = keyword.clone();
        Some(self.begin(keyword))
    }

    /// Replay a search from a shareable token.
    ///
    /// A malformed token is treated as "no prior search".
    pub fn restore(&mut self, token: &str) -> Option<SearchTicket> {
        let restored = match query::decode(token) {
            Ok(restored) => restored,
            Err(e) => {
                warn!("Ignoring share token {:?}: {}", token, e);
                return None;
            }
        };
        if restored.is_empty() {
            debug!("Share token carries no keyword");
            return None;
        }
        self.input = restored.keyword.clone();
        Some(self.begin(restored.keyword))
    }

    /// Like [`restore`](Self::restore), accepting a full share link or a bare token
    pub fn restore_link(&mut self, link: &str) -> Option<SearchTicket> {
        let token = query::token_from_link(link)?;
        self.restore(&token)
    }

    fn begin(&mut self, keyword: String) -> SearchTicket {
        self.last_issued += 1;
        let ticket = SearchTicket {
            seq: self.last_issued,
            keyword: keyword.clone(),
        };

        self.query = SearchQuery::new(keyword);
        self.share_link = Some(query::share_link(&self.share_base, &self.query));
        self.state = SearchState::Searching(ticket.clone());
        info!("Search #{} started for {:?}", ticket.seq, ticket.keyword);
        ticket
    }

    /// Whether `seq` belongs to the search currently awaited
    pub fn is_current(&self, seq: u64) -> bool {
        matches!(&self.state, SearchState::Searching(ticket) if ticket.seq == seq)
    }

    /// Sequence number of the most recently issued search, 0 before any
    pub fn latest_seq(&self) -> u64 {
        self.last_issued
    }

    /// Apply the response of search `seq`. Responses of superseded searches
    /// are dropped; returns whether the state changed.
    pub fn complete(&mut self, seq: u64, envelope: ResultEnvelope) -> bool {
        if !self.is_current(seq) {
            debug!(
                "Discarding stale response #{} (latest is #{})",
                seq, self.last_issued
            );
            return false;
        }

        let envelope = Arc::new(envelope);
        self.state = if envelope.is_success() {
            info!("Search #{} succeeded", seq);
            SearchState::Succeeded(envelope)
        } else {
            warn!("Search #{} failed: {}", seq, envelope.message);
            SearchState::Failed(envelope)
        };
        true
    }
}
