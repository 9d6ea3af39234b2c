//! Recommendation controller — owns the view state for one form.
//!
//! State is published through a `watch` channel: the view subscribes once and
//! re-renders on every change. The in-flight flag is released by a guard on
//! every exit path, including a dropped submission future.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::bail;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::client::RecommendationService;
use crate::models::form::FormInput;
use crate::models::recommendation::RecommendationRecord;
use crate::payload;

/// Which response wins when submissions overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Responses from superseded submissions are discarded.
    #[default]
    LatestSubmission,
    /// Whichever response resolves last overwrites the list.
    LastResolved,
}

impl FromStr for ResponseOrdering {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" | "latest-submission" => Ok(ResponseOrdering::LatestSubmission),
            "last-resolved" => Ok(ResponseOrdering::LastResolved),
            other => bail!(
                "Unknown response ordering '{other}' (expected 'latest' or 'last-resolved')"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Rendered exactly like an empty success.
    Failed,
}

/// Snapshot of everything the view renders.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub phase: Phase,
    /// True while any submission is unresolved. The view disables submit on it.
    pub in_flight: bool,
    /// Replaced wholesale by every applied response.
    pub recommendations: Vec<RecommendationRecord>,
    /// Token of the submission whose response is currently shown.
    pub shown_token: Option<u64>,
    pub(crate) pending: usize,
    pub(crate) settled: Phase,
}

impl ViewState {
    pub fn pending(&self) -> usize {
        self.pending
    }
}

/// What happened to one submission once its call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub token: u64,
    pub succeeded: bool,
    /// False when a newer submission superseded this one.
    pub applied: bool,
    pub records: usize,
}

pub struct RecommendationController {
    service: Arc<dyn RecommendationService>,
    ordering: ResponseOrdering,
    latest_token: AtomicU64,
    state: watch::Sender<ViewState>,
}

impl RecommendationController {
    pub fn new(service: Arc<dyn RecommendationService>, ordering: ResponseOrdering) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            service,
            ordering,
            latest_token: AtomicU64::new(0),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().in_flight
    }

    /// Builds the payload, calls the service and applies the result.
    ///
    /// Failures never reach the caller: they are logged once and shown as an
    /// empty list.
    pub async fn submit(&self, input: FormInput) -> SubmissionOutcome {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        let request = payload::build(input);
        let guard = InFlightGuard::acquire(&self.state);

        info!(
            "Submitting recommendation request #{token}: job_title={:?}, level={}, use_case={}, skills={}",
            request.job_title,
            request.level,
            request.use_case,
            request.key_skills.len()
        );

        let (records, succeeded) = match self.service.submit(&request).await {
            Ok(records) => (records, true),
            Err(e) => {
                error!("Recommendation request #{token} failed, showing no results: {e}");
                (Vec::new(), false)
            }
        };
        let count = records.len();

        let applied = guard.release(|state| {
            if self.is_stale(token) {
                debug!("Discarding response for superseded request #{token}");
                return false;
            }
            state.recommendations = records;
            state.settled = if succeeded {
                Phase::Succeeded
            } else {
                Phase::Failed
            };
            state.shown_token = Some(token);
            true
        });

        SubmissionOutcome {
            token,
            succeeded,
            applied,
            records: count,
        }
    }

    fn is_stale(&self, token: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LatestSubmission => {
                token != self.latest_token.load(Ordering::SeqCst)
            }
            ResponseOrdering::LastResolved => false,
        }
    }
}

/// Holds one unit of the in-flight count for the lifetime of a submission.
struct InFlightGuard<'a> {
    state: &'a watch::Sender<ViewState>,
    released: bool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| {
            s.pending += 1;
            s.in_flight = true;
            s.phase = Phase::Submitting;
        });
        Self {
            state,
            released: false,
        }
    }

    /// Applies `update` and drops the in-flight unit in a single state change.
    fn release<F>(mut self, update: F) -> bool
    where
        F: FnOnce(&mut ViewState) -> bool,
    {
        self.released = true;
        let mut applied = false;
        self.state.send_modify(|s| {
            applied = update(s);
            finish(s);
        });
        applied
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.state.send_modify(finish);
        }
    }
}

fn finish(state: &mut ViewState) {
    state.pending = state.pending.saturating_sub(1);
    state.in_flight = state.pending > 0;
    state.phase = if state.in_flight {
        Phase::Submitting
    } else {
        state.settled
    };
}
