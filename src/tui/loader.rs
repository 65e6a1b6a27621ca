//! Fetch lifecycle for a single view.
//!
//! A [`ViewController`] owns one [`ViewState`] and at most one in-flight
//! fetch. Results come back through the UI's channel tagged with the
//! generation that started them; anything older than the current
//! generation is dropped, and dropping the controller aborts its fetch.

use std::future::Future;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::app::Result;
use crate::domain::ViewState;

pub type Generation = u64;

pub struct ViewController<T> {
    state: ViewState<T>,
    generation: Generation,
    task: Option<AbortHandle>,
    preloaded: bool,
}

impl<T: Send + 'static> ViewController<T> {
    /// A view that fetches on mount. Starts in `Loading`.
    pub fn idle() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            task: None,
            preloaded: false,
        }
    }

    /// A view whose data was supplied up front. Starts `Ready` and never fetches.
    pub fn preloaded(data: T) -> Self {
        Self {
            state: ViewState::Ready(data),
            generation: 0,
            task: None,
            preloaded: true,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn ready(&self) -> Option<&T> {
        self.state.ready()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_preloaded(&self) -> bool {
        self.preloaded
    }

    pub fn is_in_flight(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Enter `Loading` for a new fetch, cancelling any previous one.
    pub fn begin(&mut self) -> Generation {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation += 1;
        self.state = ViewState::Loading;
        self.generation
    }

    /// Spawn `fetch` and deliver its result as `wrap(generation, result)`.
    ///
    /// No-op for preloaded views.
    pub fn start<F, M, W>(&mut self, fetch: F, tx: &UnboundedSender<M>, wrap: W)
    where
        F: Future<Output = Result<T>> + Send + 'static,
        M: Send + 'static,
        W: FnOnce(Generation, Result<T>) -> M + Send + 'static,
    {
        if self.preloaded {
            return;
        }

        let generation = self.begin();
        let tx = tx.clone();
        let handle = tokio::spawn(async move {
            let result = fetch.await;
            // A closed channel means the UI is gone; nothing left to update.
            let _ = tx.send(wrap(generation, result));
        });
        self.task = Some(handle.abort_handle());
    }

    /// Apply a finished fetch. Returns false when the result is stale.
    pub fn apply(&mut self, generation: Generation, result: Result<T>) -> bool {
        if generation != self.generation || self.preloaded {
            tracing::debug!(
                "Dropping stale result (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }

        if let Err(e) = &result {
            tracing::warn!("Fetch failed: {}", e);
        }
        self.state = result.into();
        self.task = None;
        true
    }
}

impl<T> Drop for ViewController<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
