//! Address suggestion controller
//!
//! Turns keystrokes in the start/end fields into a short ranked list of
//! address candidates. Each origin debounces on its own, every settle event
//! supersedes the previous query for that origin, and responses that arrive
//! after being superseded are dropped without touching the UI.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use domain::{AddressCandidate, AddressQuery, DomainError, Origin};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::debouncer::Debouncer;
use super::sequence_tracker::SequenceTracker;
use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, MAX_SUGGESTIONS, SuggestionViewPort};

/// Default quiet period before a query is sent
const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Configuration for the suggestion controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Quiet period in milliseconds before a query is sent (default: 100)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SuggestionConfig {
    /// Debounce window as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// What a settle event ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Candidates were rendered (possibly an empty list)
    Rendered(Vec<AddressCandidate>),
    /// Blank input: list cleared, no request issued
    Cleared,
    /// A newer settle event for the same origin cancelled this one before
    /// any request was issued
    Superseded,
    /// The response arrived after a newer query and was discarded
    Stale,
}

/// Debounced, stale-safe address autocomplete for the start and end fields
pub struct AddressSuggestionController {
    geocoder: Arc<dyn GeocodingPort>,
    view: Arc<dyn SuggestionViewPort>,
    debouncer: Debouncer<Origin>,
    sequences: SequenceTracker<Origin>,
    candidates: Mutex<HashMap<Origin, Vec<AddressCandidate>>>,
}

impl std::fmt::Debug for AddressSuggestionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSuggestionController")
            .field("debounce", &self.debouncer.delay())
            .field("latest_start", &self.sequences.latest(Origin::Start))
            .field("latest_end", &self.sequences.latest(Origin::End))
            .finish_non_exhaustive()
    }
}

impl AddressSuggestionController {
    /// Create a controller
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        view: Arc<dyn SuggestionViewPort>,
        config: &SuggestionConfig,
    ) -> Self {
        Self {
            geocoder,
            view,
            debouncer: Debouncer::new(config.debounce()),
            sequences: SequenceTracker::new(),
            candidates: Mutex::new(HashMap::new()),
        }
    }

    /// Handle a settled input/blur event for `origin`
    ///
    /// Resolves once this event has been fully handled: cleared, cancelled
    /// by a newer event, discarded as stale, or rendered.
    ///
    /// # Errors
    ///
    /// Returns the geocoder's error when the request for the newest query
    /// fails. Errors of stale requests are discarded.
    #[instrument(skip(self, raw_text))]
    pub async fn on_input_settled(
        &self,
        origin: Origin,
        raw_text: &str,
    ) -> Result<SuggestionOutcome, ApplicationError> {
        let query = AddressQuery::new(origin, raw_text);
        let seq = self.sequences.issue(origin);

        if query.is_blank() {
            self.debouncer.cancel(origin);
            self.candidates.lock().remove(&origin);
            self.view.clear_candidates(origin);
            self.view.hide_loading(origin);
            debug!(seq, "Blank input, suggestions cleared");
            return Ok(SuggestionOutcome::Cleared);
        }

        if !self.debouncer.settle(origin).await || !self.sequences.is_latest(origin, seq) {
            debug!(seq, "Superseded before request");
            return Ok(SuggestionOutcome::Superseded);
        }

        let loading = LoadingIndicator::show(self.view.as_ref(), &self.sequences, origin, seq);
        debug!(seq, query = query.text(), "Requesting suggestions");
        let result = self.geocoder.suggest(query.text(), MAX_SUGGESTIONS).await;

        if !self.sequences.is_latest(origin, seq) {
            debug!(seq, "Discarding stale suggestions");
            return Ok(SuggestionOutcome::Stale);
        }

        let mut candidates = result.inspect_err(|e| {
            warn!(seq, error = %e, "Suggestion request failed");
        })?;
        candidates.truncate(MAX_SUGGESTIONS);
        for (rank, candidate) in candidates.iter_mut().enumerate() {
            candidate.id = rank;
        }

        self.view.render_candidates(origin, &candidates);
        self.candidates.lock().insert(origin, candidates.clone());
        drop(loading);

        debug!(seq, count = candidates.len(), "Suggestions rendered");
        Ok(SuggestionOutcome::Rendered(candidates))
    }

    /// Pick the candidate with rank `id` for `origin`
    ///
    /// Writes the candidate label into the field, clears the list and
    /// supersedes any query still pending or in flight for that origin.
    ///
    /// # Errors
    ///
    /// Returns a not-found domain error when no rendered candidate has `id`.
    #[instrument(skip(self))]
    pub fn select_candidate(&self, origin: Origin, id: usize) -> Result<String, ApplicationError> {
        let candidate = {
            let mut rendered = self.candidates.lock();
            let found = rendered
                .get(&origin)
                .and_then(|list| list.iter().find(|c| c.id == id).cloned());
            if found.is_some() {
                rendered.remove(&origin);
            }
            found
        }
        .ok_or_else(|| DomainError::not_found("AddressCandidate", id))?;

        self.sequences.issue(origin);
        self.debouncer.cancel(origin);

        let label = candidate.label();
        self.view.set_field_value(origin, &label);
        self.view.clear_candidates(origin);
        self.view.hide_loading(origin);

        debug!(%label, "Candidate selected");
        Ok(label)
    }

    /// Candidates currently rendered for `origin`
    #[must_use]
    pub fn candidates(&self, origin: Origin) -> Vec<AddressCandidate> {
        self.candidates
            .lock()
            .get(&origin)
            .cloned()
            .unwrap_or_default()
    }
}

/// Loading indicator scoped to one request
///
/// Hidden on drop, unless a newer query for the origin has taken it over.
struct LoadingIndicator<'a> {
    view: &'a dyn SuggestionViewPort,
    sequences: &'a SequenceTracker<Origin>,
    origin: Origin,
    seq: u64,
}

impl<'a> LoadingIndicator<'a> {
    fn show(
        view: &'a dyn SuggestionViewPort,
        sequences: &'a SequenceTracker<Origin>,
        origin: Origin,
        seq: u64,
    ) -> Self {
        view.show_loading(origin);
        Self {
            view,
            sequences,
            origin,
            seq,
        }
    }
}

impl Drop for LoadingIndicator<'_> {
    fn drop(&mut self) {
        if self.sequences.is_latest(self.origin, self.seq) {
            self.view.hide_loading(self.origin);
        }
    }
}
