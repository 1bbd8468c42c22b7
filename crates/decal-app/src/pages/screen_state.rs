use std::{
    fmt::Debug,
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::sync::watch;
use tracing::{debug, warn};

/// What a screen shows at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot<T> {
    pub is_loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for ScreenSnapshot<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            data: None,
        }
    }
}

impl<T> ScreenSnapshot<T> {
    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.data.is_none()
    }
}

/// Holds the loading, error and data state of one screen.
///
/// Every call to [`Self::load`] or [`Self::mutate`] takes a new generation and
/// only the call holding the latest generation may write its outcome. A slow
/// call that is overtaken by a newer one has its result dropped, so the newest
/// request always wins.
///
/// A failed call leaves the previous data in place.
pub struct ScreenState<T> {
    state: watch::Sender<ScreenSnapshot<T>>,
    generation: AtomicU64,
}

impl<T: Debug> Debug for ScreenState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenState")
            .field("snapshot", &*self.state.borrow())
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        let (state, _) = watch::channel(ScreenSnapshot::default());
        Self {
            state,
            generation: AtomicU64::new(0),
        }
    }
}

impl<T: Clone> ScreenState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenSnapshot<T>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ScreenSnapshot<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Option<T> {
        self.state.borrow().data.clone()
    }

    /// Sets `is_loading`, clears the error, awaits `fetch` and stores either
    /// its data or its error message
    pub async fn load<F>(&self, fetch: F)
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        let generation = self.begin();
        let outcome = fetch.await;
        self.finish(generation, |snapshot| match outcome {
            Ok(data) => snapshot.data = Some(data),
            Err(e) => {
                warn!(?e, "load failed");
                snapshot.error = Some(e.to_string());
            }
        });
    }

    /// Like [`Self::load`] but for a call whose result is handed back to the
    /// caller instead of being stored. The data is left untouched.
    pub async fn mutate<F, R>(&self, call: F) -> Option<R>
    where
        F: Future<Output = anyhow::Result<R>>,
    {
        let generation = self.begin();
        match call.await {
            Ok(value) => {
                self.finish(generation, |_| {});
                Some(value)
            }
            Err(e) => {
                warn!(?e, "mutation failed");
                let msg = e.to_string();
                self.finish(generation, |snapshot| snapshot.error = Some(msg));
                None
            }
        }
    }

    /// Shows `msg` without making a call. Outcomes of calls still in flight are
    /// dropped.
    pub fn set_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|snapshot| {
            snapshot.is_loading = false;
            snapshot.error = Some(msg);
        });
    }

    /// Replaces the data without making a call, for screens whose data is
    /// already held locally. Outcomes of calls still in flight are dropped.
    pub fn set_data(&self, data: T) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|snapshot| {
            snapshot.is_loading = false;
            snapshot.error = None;
            snapshot.data = Some(data);
        });
    }

    /// Back to the idle state
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(ScreenSnapshot::default());
    }

    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|snapshot| {
            snapshot.is_loading = true;
            snapshot.error = None;
        });
        generation
    }

    /// Applies `update` only if no newer call has started since `generation`
    /// was taken
    fn finish(&self, generation: u64, update: impl FnOnce(&mut ScreenSnapshot<T>)) -> bool {
        self.state.send_if_modified(|snapshot| {
            // Checked while holding the write lock so a newer call cannot
            // finish in between
            let latest = self.generation.load(Ordering::SeqCst);
            if latest != generation {
                debug!(generation, latest, "dropping outcome of superseded call");
                return false;
            }
            snapshot.is_loading = false;
            update(snapshot);
            true
        })
    }
}
