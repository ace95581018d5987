use payloads::keys::QueryKey;
use payloads::requests::ChecksQuery;
use payloads::responses::CheckPage;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, QueryConfig, use_keyed_fetch};
use crate::get_api_client;
use crate::state::State;

/// Fetch one page of check reports for the given options.
///
/// Options are merged over the fixed listing defaults (first page, 100
/// per page, newest first), caller values winning. Two callers whose
/// merged options are deeply equal share one cache entry and at most one
/// in-flight request; any difference makes a distinct entry.
#[hook]
pub fn use_checks(options: ChecksQuery) -> FetchHookReturn<CheckPage> {
    use_checks_with_config(options, QueryConfig::default())
}

/// [`use_checks`] with explicit behavior flags for the caching layer.
#[hook]
pub fn use_checks_with_config(
    options: ChecksQuery,
    config: QueryConfig,
) -> FetchHookReturn<CheckPage> {
    let (state, dispatch) = use_store::<State>();
    let merged = options.or_defaults(&ChecksQuery::listing_defaults());
    let key = QueryKey::list(merged.clone());

    use_keyed_fetch(
        key.clone(),
        config,
        {
            let state = state.clone();
            let key = key.clone();
            move || state.get_page(&key).cloned()
        },
        move || {
            let merged = merged.clone();
            let key = key.clone();
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let page: CheckPage = api_client
                    .list_checks(&merged)
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_page(key, page.clone()));
                Ok(page)
            }
        },
    )
}
