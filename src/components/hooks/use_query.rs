use crate::api::queries::Query;
use crate::api::CatalogApi;
use crate::cache::{QueryClient, QueryKey, QueryObserver, QueryResult};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Reactive handle returned by [`use_query`].
pub(crate) struct UseQuery<T: Send + Sync + 'static> {
    pub result: ReadSignal<QueryResult<T>>,
    key: StoredValue<Option<QueryKey>>,
    queries: StoredValue<QueryClient>,
    retry: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for UseQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseQuery<T> {}

impl<T: Clone + Send + Sync + 'static> UseQuery<T> {
    pub fn get(&self) -> QueryResult<T> {
        self.result.get()
    }

    /// Drops the cached entry for the current key and fetches it again.
    pub fn retry(&self) {
        if let Some(Some(key)) = self.key.try_get_value() {
            self.queries.with_value(|q| q.invalidate(&key));
        }
        self.retry.update(|n| *n = n.wrapping_add(1));
    }
}

/// Per-hook state: the result signal plus the guards that keep it consistent
/// with the key the view currently asks for.
struct QueryBinding<T: Send + Sync + 'static> {
    result: RwSignal<QueryResult<T>>,
    request_id: StoredValue<u64>,
    current_key: StoredValue<Option<QueryKey>>,
    observer: StoredValue<Option<QueryObserver>>,
    queries: StoredValue<QueryClient>,
}

impl<T: Send + Sync + 'static> Clone for QueryBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryBinding<T> {}

impl<T: Clone + Default + Send + Sync + 'static> QueryBinding<T> {
    /// The first render already reflects `initial`: cached data, or loading.
    /// Only a disabled query starts idle.
    fn new(queries: QueryClient, initial: Option<&QueryKey>) -> Self {
        let seed = match initial {
            Some(key) => queries
                .cached::<T>(key)
                .map(|data| QueryResult::resolved((*data).clone()))
                .unwrap_or_else(QueryResult::loading),
            None => QueryResult::idle(),
        };

        Self {
            result: RwSignal::new(seed),
            request_id: StoredValue::new(0),
            current_key: StoredValue::new(None),
            observer: StoredValue::new(None),
            queries: StoredValue::new(queries),
        }
    }

    /// Points the binding at `query`. Returns the request to run when the key
    /// is not already cached.
    fn select<Q: Query<Output = T>>(self, query: Option<Q>) -> Option<PendingQuery<Q>> {
        let req_id = self.request_id.get_value().wrapping_add(1);
        self.request_id.set_value(req_id);

        let Some(query) = query else {
            self.current_key.set_value(None);
            self.observer.set_value(None);
            self.result.set(QueryResult::idle());
            return None;
        };

        let queries = self.queries.get_value();
        let key = query.key();
        // Observe the new key before the old guard drops.
        self.observer.set_value(Some(queries.observe(&key)));
        self.current_key.set_value(Some(key.clone()));
        queries.collect_garbage();

        if let Some(data) = queries.cached::<T>(&key) {
            self.result.set(QueryResult::resolved((*data).clone()));
            return None;
        }

        self.result.set(QueryResult::loading());
        Some(PendingQuery {
            binding: self,
            query,
            key,
            req_id,
        })
    }

    fn release(self) {
        let _ = self.observer.try_update_value(|o| *o = None);
    }

    fn handle(self, retry: RwSignal<u64>) -> UseQuery<T> {
        UseQuery {
            result: self.result.read_only(),
            key: self.current_key,
            queries: self.queries,
            retry,
        }
    }
}

/// A fetch started by [`QueryBinding::select`].
struct PendingQuery<Q: Query> {
    binding: QueryBinding<Q::Output>,
    query: Q,
    key: QueryKey,
    req_id: u64,
}

impl<Q: Query> PendingQuery<Q> {
    async fn run<A: CatalogApi>(self, api: &A) {
        let Some(queries) = self.binding.queries.try_get_value() else {
            return;
        };
        let outcome = queries.run(&self.query, api).await;

        // Ignore stale responses.
        if self.binding.request_id.try_get_value() != Some(self.req_id) {
            log::debug!("query {}: view moved on, dropping response", self.key);
            return;
        }

        let next = match outcome {
            Ok(data) => QueryResult::resolved((*data).clone()),
            Err(e) => {
                log::warn!("query {} failed: {e}", self.key);
                QueryResult::failed(e)
            }
        };
        let _ = self.binding.result.try_set(next);
    }
}

/// Binds a view to a cached query.
///
/// `query_fn` is tracked: whenever the query it returns changes, the view goes
/// back to loading and the new key is fetched (or served from cache). `None`
/// disables the query. A response for a key the view has since moved away from
/// is never applied.
pub(crate) fn use_query<Q, F>(query_fn: F) -> UseQuery<Q::Output>
where
    Q: Query,
    F: Fn() -> Option<Q> + 'static,
{
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;

    let initial = untrack(&query_fn).map(|q| q.key());
    let binding = QueryBinding::<Q::Output>::new(app_state.0.queries.clone(), initial.as_ref());
    let retry = RwSignal::new(0u64);

    Effect::new(move |_| {
        retry.track();
        if let Some(pending) = binding.select(query_fn()) {
            let api = api_client.get_value();
            spawn_local(async move { pending.run(&api).await });
        }
    });

    on_cleanup(move || binding.release());

    binding.handle(retry)
}
