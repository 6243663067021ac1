use std::{future::Future, sync::Arc};

use tokio::sync::Mutex;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Fetching,
    Ready,
    FetchFailed,
    Submitting,
    SubmitFailed,
    Closed,
}

/// Proof that a fetch was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Proof that a submission was started at a given generation.
///
/// Submit generations are counted separately from fetch generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Whether a completion was applied to the screen or thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// The working set of one screen plus its lifecycle.
///
/// Fetches hand out a [`FetchTicket`], submissions a [`SubmitTicket`];
/// completing with a ticket that is no longer current (a newer fetch
/// started, or the screen was torn down) leaves the screen untouched.
#[derive(Debug)]
pub struct Screen<T> {
    items: Vec<T>,
    state: ScreenState,
    fetch_generation: u64,
    submit_generation: u64,
}

pub type SharedScreen<T> = Arc<Mutex<Screen<T>>>;

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: ScreenState::Idle,
            fetch_generation: 0,
            submit_generation: 0,
        }
    }

    pub fn shared() -> SharedScreen<T> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Starts a fetch. Any fetch still in flight becomes stale.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.state == ScreenState::Closed {
            return None;
        }
        self.fetch_generation += 1;
        self.state = ScreenState::Fetching;
        Some(FetchTicket {
            generation: self.fetch_generation,
        })
    }

    /// Applies a fetch result.
    ///
    /// On success the working set is replaced wholesale. On failure the
    /// previous working set stays and the error is handed back. Stale
    /// results, successful or not, are discarded.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>>,
    ) -> Result<Completion> {
        if !self.is_current_fetch(ticket) {
            return Ok(Completion::Stale);
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.state = ScreenState::Ready;
                Ok(Completion::Applied)
            }
            Err(e) => {
                self.state = ScreenState::FetchFailed;
                Err(e)
            }
        }
    }

    /// Reorders the working set. Only a `Ready` screen is transformed.
    pub fn transform<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        if self.state != ScreenState::Ready {
            return false;
        }
        let items = std::mem::take(&mut self.items);
        self.items = f(items);
        true
    }

    /// Starts a submission from `Ready`, or retries one after `SubmitFailed`.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        match self.state {
            ScreenState::Ready | ScreenState::SubmitFailed => {
                self.submit_generation += 1;
                self.state = ScreenState::Submitting;
                Some(SubmitTicket {
                    generation: self.submit_generation,
                })
            }
            _ => None,
        }
    }

    /// Records the outcome of a submission and passes the result through.
    ///
    /// The working set is never touched. A stale ticket leaves the state as
    /// it is; the caller still gets the result since the backend call
    /// already happened.
    pub fn complete_submit<H>(&mut self, ticket: SubmitTicket, result: Result<H>) -> Result<H> {
        if self.state == ScreenState::Submitting && ticket.generation == self.submit_generation {
            self.state = if result.is_ok() {
                ScreenState::Ready
            } else {
                ScreenState::SubmitFailed
            };
        }
        result
    }

    /// Discards the working set. Later completions are no-ops.
    pub fn teardown(&mut self) {
        self.items.clear();
        self.state = ScreenState::Closed;
    }

    fn is_current_fetch(&self, ticket: FetchTicket) -> bool {
        self.state == ScreenState::Fetching && ticket.generation == self.fetch_generation
    }
}

/// Runs `fetch` against a shared screen without holding the lock across the
/// network call.
pub async fn refresh<T, F>(screen: &SharedScreen<T>, fetch: F) -> Result<Completion>
where
    F: Future<Output = Result<Vec<T>>>,
{
    let Some(ticket) = screen.lock().await.begin_fetch() else {
        return Ok(Completion::Stale);
    };
    let result = fetch.await;
    screen.lock().await.complete_fetch(ticket, result)
}
