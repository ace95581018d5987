use std::future::Future;
use std::rc::Rc;

use payloads::keys::QueryKey;
use yew::prelude::*;
use yewdux::prelude::*;

use super::FetchState;
use crate::state::State;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// This handles the common pattern of:
    /// - No data + loading: Show "Loading {context}..."
    /// - No data + error: Show "Error loading {context}: ..."
    /// - Has data: Call render function with (data, is_loading, error);
    ///   data from the previous fetch stays visible during a refetch.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // Shouldn't happen: no data, not loading, no error
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Behavior flags handed through to the caching layer.
#[derive(Clone, Copy, PartialEq)]
pub struct QueryConfig {
    /// Fetch automatically on mount, key change, or invalidation
    pub auto_fetch: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig { auto_fetch: true }
    }
}

/// Register a fetch function against a cache key.
///
/// Cached data for the key is returned immediately and stays visible
/// while a refetch is in flight. The global store tracks in-flight keys,
/// so at most one request runs per key no matter how many components
/// use it. It takes two closures:
///
/// 1. `get_cached`: Retrieves the cached value from global state
/// 2. `fetch_and_cache`: Performs the API call and updates global state
///
/// # Example
///
/// ```ignore
/// use_keyed_fetch(
///     key.clone(),
///     QueryConfig::default(),
///     move || state.get_page(&key).cloned(),
///     move || async move {
///         let page = get_api_client()
///             .list_checks(&query)
///             .await
///             .map_err(|e| e.to_string())?;
///         dispatch.reduce_mut(|s| s.set_page(key, page.clone()));
///         Ok(page)
///     },
/// )
/// ```
#[hook]
pub fn use_keyed_fetch<T, GetCached, Fetch, Fut>(
    key: QueryKey,
    config: QueryConfig,
    get_cached: GetCached,
    fetch_and_cache: Fetch,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    Fetch: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let (state, dispatch) = use_store::<State>();
    let error = use_state(|| None::<String>);

    let refetch = {
        let error = error.clone();
        let dispatch = dispatch.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(key.clone(), move |key: QueryKey, _| {
            // Dedupe: another component is already fetching this key
            if dispatch.get().is_in_flight(&key) {
                return;
            }
            let error = error.clone();
            let dispatch = dispatch.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            dispatch.reduce_mut(|s| s.begin_fetch(key.clone()));
            yew::platform::spawn_local(async move {
                error.set(None);

                match fetch_and_cache().await {
                    Ok(_) => {
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                dispatch.reduce_mut(|s| s.finish_fetch(&key));
            });
        })
    };

    let cached = get_cached();
    let has_cached = cached.is_some();

    // Auto-fetch on mount, when the key changes, and when an
    // invalidation drops the cached entry
    {
        let refetch = refetch.clone();
        let auto_fetch = config.auto_fetch;

        use_effect_with(
            (key.clone(), has_cached),
            move |(key, has_cached)| {
                if auto_fetch && !*has_cached {
                    refetch.emit(key.clone());
                }
            },
        );
    }

    let data = match cached {
        Some(value) => FetchState::Fetched(value),
        None => FetchState::NotFetched,
    };

    // Loading if a request is in flight, or we're about to issue the
    // initial fetch
    let is_loading = state.is_in_flight(&key)
        || (config.auto_fetch && !data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(key.clone())),
    }
}
