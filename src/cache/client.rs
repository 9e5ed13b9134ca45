use crate::api::queries::Query;
use crate::api::{ApiError, ApiResult, CatalogApi};
use crate::cache::QueryKey;
use futures::channel::oneshot;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

type Payload = Arc<dyn Any + Send + Sync>;
type Waiter = oneshot::Sender<Result<Payload, ApiError>>;
type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;
type SizeListener = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Clone, Debug)]
pub(crate) enum EntryState {
    Idle,
    Pending,
    Resolved(Payload),
    Failed,
}

impl EntryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

struct Entry {
    state: EntryState,

    /// Token of the request whose response may populate this entry.
    generation: u64,

    /// Callers that joined an in-flight request, tagged with the generation they joined.
    waiters: Vec<(u64, Waiter)>,

    observers: usize,

    /// Set while nobody observes the entry; drives garbage collection.
    released_at_ms: Option<i64>,
}

impl Entry {
    fn new(now_ms: i64) -> Self {
        Self {
            state: EntryState::Idle,
            generation: 0,
            waiters: Vec::new(),
            observers: 0,
            released_at_ms: Some(now_ms),
        }
    }
}

struct Inner {
    entries: HashMap<QueryKey, Entry>,
    last_generation: u64,
    gc_time_ms: i64,
    on_size_change: Option<SizeListener>,
}

enum Plan {
    Cached(Payload),
    Join(oneshot::Receiver<Result<Payload, ApiError>>),
    Run(u64),
}

/// Keyed request cache shared by every view.
///
/// All mutation goes through this type. Concurrent fetches for one key share a
/// single underlying request, and responses from superseded generations never
/// overwrite the entry.
#[derive(Clone)]
pub(crate) struct QueryClient {
    inner: Arc<Mutex<Inner>>,
    clock: Clock,
}

impl QueryClient {
    pub fn new(gc_time_ms: i64) -> Self {
        Self::with_clock(gc_time_ms, Arc::new(crate::util::now_ms))
    }

    pub fn with_clock(gc_time_ms: i64, clock: Clock) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::new(),
                last_generation: 0,
                gc_time_ms,
                on_size_change: None,
            })),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn now(&self) -> i64 {
        (self.clock)()
    }

    /// Calls `listener` with the entry count whenever entries are added or dropped.
    pub fn on_size_change(&self, listener: impl Fn(usize) + Send + Sync + 'static) {
        self.lock().on_size_change = Some(Arc::new(listener));
    }

    fn notify_size(&self, before: usize) {
        let (len, listener) = {
            let inner = self.lock();
            (inner.entries.len(), inner.on_size_change.clone())
        };
        match listener {
            Some(listener) if len != before => listener(len),
            _ => {}
        }
    }

    /// Returns the cached value for `key`, or runs `fetcher` once for all concurrent callers.
    ///
    /// A response that arrives after the key was invalidated is still returned to the
    /// callers that asked for it, but is not stored.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> ApiResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let before = self.len();
        let plan = self.plan(key);
        self.notify_size(before);

        let payload = match plan {
            Plan::Cached(payload) => payload,
            Plan::Join(rx) => {
                log::debug!("query {key}: joining in-flight request");
                rx.await.unwrap_or_else(|_| Err(ApiError::cancelled()))?
            }
            Plan::Run(generation) => {
                log::debug!("query {key}: fetching (generation {generation})");
                let result = fetcher().await.map(|v| Arc::new(v) as Payload);
                self.complete(key, generation, result.clone());
                result?
            }
        };

        payload
            .downcast::<T>()
            .map_err(|_| ApiError::parse(format!("cached value for {key} has a different type")))
    }

    /// Typed entry point: key and fetcher both come from `query`.
    pub async fn run<Q, A>(&self, query: &Q, api: &A) -> ApiResult<Arc<Q::Output>>
    where
        Q: Query,
        A: CatalogApi,
    {
        self.fetch(&query.key(), || query.fetch(api)).await
    }

    fn plan(&self, key: &QueryKey) -> Plan {
        let now = self.now();
        let mut guard = self.lock();
        let Inner {
            entries,
            last_generation,
            ..
        } = &mut *guard;

        let entry = entries.entry(key.clone()).or_insert_with(|| Entry::new(now));
        match &entry.state {
            EntryState::Resolved(payload) => Plan::Cached(payload.clone()),
            EntryState::Pending => {
                let (tx, rx) = oneshot::channel();
                entry.waiters.push((entry.generation, tx));
                Plan::Join(rx)
            }
            EntryState::Idle | EntryState::Failed => {
                *last_generation += 1;
                entry.generation = *last_generation;
                entry.state = EntryState::Pending;
                Plan::Run(entry.generation)
            }
        }
    }

    fn complete(&self, key: &QueryKey, generation: u64, result: Result<Payload, ApiError>) {
        let waiters = {
            let mut inner = self.lock();
            let Some(entry) = inner.entries.get_mut(key) else {
                log::debug!("query {key}: entry dropped before response arrived");
                return;
            };

            let (ours, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut entry.waiters)
                .into_iter()
                .partition(|(g, _)| *g == generation);
            entry.waiters = rest;

            if entry.generation == generation {
                entry.state = match &result {
                    Ok(payload) => EntryState::Resolved(payload.clone()),
                    Err(_) => EntryState::Failed,
                };
            } else {
                log::debug!(
                    "query {key}: discarding stale response (generation {generation}, current {})",
                    entry.generation
                );
            }
            ours
        };

        for (_, tx) in waiters {
            let _ = tx.send(result.clone());
        }
    }

    /// Marks `key` stale. The next fetch issues a new request under a fresh generation,
    /// and any response still in flight for the old generation is not stored.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut guard = self.lock();
        let Inner {
            entries,
            last_generation,
            ..
        } = &mut *guard;

        if let Some(entry) = entries.get_mut(key) {
            *last_generation += 1;
            entry.generation = *last_generation;
            entry.state = EntryState::Idle;
            log::debug!("query {key}: invalidated");
        }
    }

    pub fn state(&self, key: &QueryKey) -> EntryState {
        self.lock()
            .entries
            .get(key)
            .map(|e| e.state.clone())
            .unwrap_or(EntryState::Idle)
    }

    /// Resolved value for `key`, if any, without triggering a fetch.
    pub fn cached<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        match self.state(key) {
            EntryState::Resolved(payload) => payload.downcast::<T>().ok(),
            _ => None,
        }
    }

    /// Registers a view as a reader of `key` until the returned guard drops.
    pub fn observe(&self, key: &QueryKey) -> QueryObserver {
        let now = self.now();
        let before = {
            let mut inner = self.lock();
            let before = inner.entries.len();
            let entry = inner
                .entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(now));
            entry.observers += 1;
            entry.released_at_ms = None;
            before
        };
        self.notify_size(before);

        QueryObserver {
            client: self.clone(),
            key: key.clone(),
        }
    }

    fn release(&self, key: &QueryKey) {
        let now = self.now();
        let mut inner = self.lock();
        if let Some(entry) = inner.entries.get_mut(key) {
            entry.observers = entry.observers.saturating_sub(1);
            if entry.observers == 0 {
                entry.released_at_ms = Some(now);
            }
        }
    }

    /// Drops unobserved, settled entries released longer than the GC window ago.
    pub fn collect_garbage(&self) -> usize {
        let now = self.now();
        let before = self.len();
        let collected = self.sweep(now);
        self.notify_size(before);
        collected
    }

    fn sweep(&self, now: i64) -> usize {
        let mut inner = self.lock();
        let gc_time_ms = inner.gc_time_ms;
        let before = inner.entries.len();

        inner.entries.retain(|key, entry| {
            let expired = entry.observers == 0
                && !entry.state.is_pending()
                && entry
                    .released_at_ms
                    .is_some_and(|t| now.saturating_sub(t) >= gc_time_ms);
            if expired {
                log::debug!("query {key}: collected");
            }
            !expired
        });

        before - inner.entries.len()
    }

    #[cfg(test)]
    pub fn observer_count(&self, key: &QueryKey) -> usize {
        self.lock().entries.get(key).map_or(0, |e| e.observers)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Forgets every entry. Callers still waiting on a shared request see `Cancelled`.
    pub fn clear(&self) {
        let before = self.len();
        self.lock().entries.clear();
        self.notify_size(before);
    }
}

/// Keeps a cache entry alive while a view reads it.
pub(crate) struct QueryObserver {
    client: QueryClient,
    key: QueryKey,
}

impl Drop for QueryObserver {
    fn drop(&mut self) {
        self.client.release(&self.key);
    }
}
