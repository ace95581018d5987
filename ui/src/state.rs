use std::collections::{HashMap, HashSet};

use payloads::keys::QueryKey;
use payloads::responses::CheckPage;
use yewdux::prelude::*;

/// Global UI state.
///
/// Check pages are cached per merged option set, keyed by the query's
/// structural identity, so two components asking for the same filtered
/// view share one entry and one fetch.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub error_message: Option<String>, // Global error handling

    // === Check listing cache (managed by use_checks) ===
    check_pages: HashMap<QueryKey, CheckPage>,
    /// Keys with a fetch currently in flight; at most one per key
    in_flight: HashSet<QueryKey>,
}

impl State {
    pub fn get_page(&self, key: &QueryKey) -> Option<&CheckPage> {
        self.check_pages.get(key)
    }

    pub fn has_page(&self, key: &QueryKey) -> bool {
        self.check_pages.contains_key(key)
    }

    pub fn set_page(&mut self, key: QueryKey, page: CheckPage) {
        self.check_pages.insert(key, page);
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn begin_fetch(&mut self, key: QueryKey) {
        self.in_flight.insert(key);
    }

    pub fn finish_fetch(&mut self, key: &QueryKey) {
        self.in_flight.remove(key);
    }

    /// Drop every cached page whose key equals or extends the prefix.
    /// Affected hooks refetch on their next render.
    pub fn invalidate(&mut self, prefix: &QueryKey) {
        self.check_pages.retain(|key, _| !prefix.is_prefix_of(key));
    }
}

#[cfg(test)]
mod tests {
    use payloads::requests::ChecksQuery;
    use payloads::responses::CheckPage;

    use super::*;

    fn empty_page() -> CheckPage {
        CheckPage {
            checks: vec![],
            total: 0,
            page: 1,
            limit: 100,
        }
    }

    #[test]
    fn invalidating_the_list_prefix_clears_every_option_set() {
        let mut state = State::default();
        let key_a = QueryKey::list(ChecksQuery::listing_defaults());
        let key_b = QueryKey::list(ChecksQuery {
            viewed: Some(false),
            ..ChecksQuery::listing_defaults()
        });
        state.set_page(key_a.clone(), empty_page());
        state.set_page(key_b.clone(), empty_page());

        state.invalidate(&QueryKey::lists());

        assert!(!state.has_page(&key_a));
        assert!(!state.has_page(&key_b));
    }

    #[test]
    fn in_flight_tracking_is_per_key_and_clears_on_finish() {
        let mut state = State::default();
        let key_a = QueryKey::list(ChecksQuery::listing_defaults());
        let key_b = QueryKey::list(ChecksQuery {
            page: Some(2),
            ..ChecksQuery::listing_defaults()
        });

        state.begin_fetch(key_a.clone());
        assert!(state.is_in_flight(&key_a));
        assert!(!state.is_in_flight(&key_b));

        // finish_fetch runs whether the fetch succeeded or failed, so a
        // failed request must not leave its key stuck in flight
        state.finish_fetch(&key_a);
        assert!(!state.is_in_flight(&key_a));
    }

    #[test]
    fn invalidating_one_concrete_key_leaves_siblings() {
        let mut state = State::default();
        let key_a = QueryKey::list(ChecksQuery::listing_defaults());
        let key_b = QueryKey::list(ChecksQuery {
            page: Some(2),
            ..ChecksQuery::listing_defaults()
        });
        state.set_page(key_a.clone(), empty_page());
        state.set_page(key_b.clone(), empty_page());

        state.invalidate(&key_a);

        assert!(!state.has_page(&key_a));
        assert!(state.has_page(&key_b));
    }
}
