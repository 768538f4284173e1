use std::sync::{Arc, Mutex};

use storage::{
    dto::{
        filter::{EventFilter, EventResults, ResultWithGroup, ResultsFilter},
        leaderboard::LeaderboardEntry,
    },
    models::{Event, EventResult, Group},
    services::{event_filter, leaderboard},
};
use tokio::sync::watch;
use uuid::Uuid;

use crate::{Result, backend::Backend};

/// Everything the views render from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub groups: Vec<Group>,
    pub events: Vec<Event>,
    pub results: Vec<EventResult>,
    pub dark_mode: bool,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Collection {
    Groups = 0,
    Events = 1,
    Results = 2,
}

/// Request sequencing per collection
#[derive(Debug, Default)]
struct Tracking {
    issued: [u64; 3],
    applied: [u64; 3],
    in_flight: usize,
}

struct StoreInner {
    backend: Arc<dyn Backend>,
    state: watch::Sender<StoreState>,
    tracking: Mutex<Tracking>,
}

/// In-memory copy of the festival tables shared by all views.
///
/// Every fetch is tagged with a sequence number when issued and its response
/// is applied only if nothing newer has been applied for that collection, so
/// a slow stale response can never overwrite fresher data. Fetch failures are
/// recorded in [`StoreState::error`] and leave the previous rows in place.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend,
                state: watch::Sender::new(StoreState::default()),
                tracking: Mutex::new(Tracking::default()),
            }),
        }
    }

    pub fn snapshot(&self) -> StoreState {
        self.inner.state.borrow().clone()
    }

    /// Notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.state.subscribe()
    }

    pub async fn fetch_groups(&self) {
        let seq = self.begin(Collection::Groups);
        let outcome = self.inner.backend.list_groups().await;
        self.finish(Collection::Groups, seq, outcome, |state, groups| {
            state.groups = groups
        });
    }

    pub async fn fetch_events(&self) {
        let seq = self.begin(Collection::Events);
        let outcome = self.inner.backend.list_events().await;
        self.finish(Collection::Events, seq, outcome, |state, events| {
            state.events = events
        });
    }

    pub async fn fetch_results(&self) {
        let seq = self.begin(Collection::Results);
        let outcome = self.inner.backend.list_results().await;
        self.finish(Collection::Results, seq, outcome, |state, results| {
            state.results = results
        });
    }

    /// Fetches all three collections concurrently
    pub async fn fetch_all(&self) {
        tokio::join!(self.fetch_groups(), self.fetch_events(), self.fetch_results());
    }

    pub fn toggle_dark_mode(&self) {
        self.inner
            .state
            .send_modify(|state| state.dark_mode = !state.dark_mode);
    }

    pub fn find_event(&self, event_id: Uuid) -> Option<Event> {
        self.inner
            .state
            .borrow()
            .events
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned()
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::rank_groups(&self.inner.state.borrow().groups)
    }

    pub fn upcoming_events(&self, filter: &EventFilter) -> Vec<Event> {
        let state = self.inner.state.borrow();
        event_filter::upcoming_events(&state.events, &state.results, filter)
    }

    pub fn published_results(&self, filter: &ResultsFilter) -> Vec<EventResults> {
        let state = self.inner.state.borrow();
        event_filter::published_results(&state.events, &state.results, &state.groups, filter)
    }

    pub fn event_results(&self, event_id: Uuid) -> Vec<ResultWithGroup> {
        let state = self.inner.state.borrow();
        event_filter::event_results(event_id, &state.results, &state.groups)
    }

    /// Date options for the filter bars
    pub fn available_dates(&self) -> Vec<String> {
        event_filter::available_dates(&self.inner.state.borrow().events)
    }

    pub fn available_stages(&self) -> Vec<String> {
        event_filter::available_stages(&self.inner.state.borrow().events)
    }

    fn tracking(&self) -> std::sync::MutexGuard<'_, Tracking> {
        self.inner.tracking.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn begin(&self, collection: Collection) -> u64 {
        let mut tracking = self.tracking();
        tracking.issued[collection as usize] += 1;
        tracking.in_flight += 1;
        let seq = tracking.issued[collection as usize];

        self.inner.state.send_modify(|state| state.loading = true);
        seq
    }

    fn finish<T>(
        &self,
        collection: Collection,
        seq: u64,
        outcome: Result<Vec<T>>,
        apply: impl FnOnce(&mut StoreState, Vec<T>),
    ) {
        let mut tracking = self.tracking();
        tracking.in_flight = tracking.in_flight.saturating_sub(1);
        let loading = tracking.in_flight > 0;

        let slot = collection as usize;
        let fresh = seq > tracking.applied[slot];
        if fresh {
            tracking.applied[slot] = seq;
        }

        self.inner.state.send_modify(|state| {
            state.loading = loading;

            if !fresh {
                tracing::debug!(
                    "Discarding stale {:?} response #{} (applied #{})",
                    collection,
                    seq,
                    tracking.applied[slot]
                );
                return;
            }

            match outcome {
                Ok(rows) => {
                    apply(state, rows);
                    state.error = None;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch {:?}: {}", collection, e);
                    state.error = Some(e.to_string());
                }
            }
        });
    }
}
