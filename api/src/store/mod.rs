use std::sync::{Arc, RwLock};

use payloads::requests::{self, ChecksQuery};
use payloads::responses::{Check, CheckPage};
use payloads::{CheckId, SortOrder};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("check not found")]
    CheckNotFound,
}

/// In-memory storage for check reports.
///
/// Cloning is cheap and shares the underlying data.
#[derive(Clone, Default)]
pub struct CheckStore {
    checks: Arc<RwLock<Vec<Check>>>,
}

impl CheckStore {
    pub fn insert(&self, check: Check) {
        self.checks.write().unwrap().push(check);
    }

    pub fn seed(&self, checks: impl IntoIterator<Item = Check>) {
        self.checks.write().unwrap().extend(checks);
    }

    pub fn mark_viewed(&self, check_id: CheckId) -> Result<(), StoreError> {
        let mut checks = self.checks.write().unwrap();
        let check = checks
            .iter_mut()
            .find(|check| check.id == check_id)
            .ok_or(StoreError::CheckNotFound)?;
        check.viewed = true;
        Ok(())
    }

    /// Filter, sort, and paginate per the query options.
    ///
    /// Pagination and sort fall back to the listing defaults when unset;
    /// `page`/`limit` of zero are treated as unset to match the client's
    /// inclusion policy.
    pub fn query(&self, query: &ChecksQuery) -> CheckPage {
        let checks = self.checks.read().unwrap();

        let needle = query
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());
        let mut matches: Vec<&Check> = checks
            .iter()
            .filter(|check| {
                if let Some(needle) = &needle {
                    let plate = check.plate_number.to_lowercase();
                    let model = check.vehicle_model.to_lowercase();
                    if !plate.contains(needle) && !model.contains(needle) {
                        return false;
                    }
                }
                // viewed is a tri-state: absent means "either"
                if let Some(viewed) = query.viewed {
                    if check.viewed != viewed {
                        return false;
                    }
                }
                if let Some(code_state) = query.code_state {
                    if check.code_state != code_state {
                        return false;
                    }
                }
                if let Some(payment_state) = query.payment_state {
                    if check.payment_state != payment_state {
                        return false;
                    }
                }
                true
            })
            .collect();

        let sort_by = query
            .sort_by
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(requests::DEFAULT_SORT_BY);
        let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
        matches.sort_by(|a, b| {
            let ordering = match sort_by {
                "plate_number" => a.plate_number.cmp(&b.plate_number),
                "vehicle_model" => a.vehicle_model.cmp(&b.vehicle_model),
                // unknown sort fields fall back to recency
                _ => a.created_at.cmp(&b.created_at),
            };
            match sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let page = query.page.filter(|p| *p != 0).unwrap_or(requests::DEFAULT_PAGE);
        let limit =
            query.limit.filter(|l| *l != 0).unwrap_or(requests::DEFAULT_LIMIT);
        let total = matches.len() as u64;
        let start = (page as usize - 1).saturating_mul(limit as usize);
        let checks = matches
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        CheckPage {
            checks,
            total,
            page,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use payloads::{CodeState, PaymentState};
    use uuid::Uuid;

    use super::*;

    fn check(plate: &str, model: &str, age_days: i64) -> Check {
        Check {
            id: CheckId(Uuid::new_v4()),
            plate_number: plate.to_string(),
            vehicle_model: model.to_string(),
            viewed: false,
            code_state: CodeState::Confirmed,
            payment_state: PaymentState::Paid,
            created_at: Timestamp::from_second(1_700_000_000 - age_days * 86_400)
                .unwrap(),
        }
    }

    fn seeded_store() -> CheckStore {
        let store = CheckStore::default();
        store.seed([
            check("ABC-123", "Toyota Corolla", 3),
            check("DEF-456", "Honda Civic", 1),
            check("GHI-789", "Toyota Camry", 2),
        ]);
        store
    }

    #[test]
    fn defaults_return_newest_first() {
        let page = seeded_store().query(&ChecksQuery::default());
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 100);
        assert_eq!(page.checks[0].plate_number, "DEF-456");
        assert_eq!(page.checks[2].plate_number, "ABC-123");
    }

    #[test]
    fn search_matches_plate_and_model_case_insensitively() {
        let store = seeded_store();
        let by_model = store.query(&ChecksQuery {
            search: Some("toyota".to_string()),
            ..Default::default()
        });
        assert_eq!(by_model.total, 2);

        let by_plate = store.query(&ChecksQuery {
            search: Some("def-4".to_string()),
            ..Default::default()
        });
        assert_eq!(by_plate.total, 1);
        assert_eq!(by_plate.checks[0].vehicle_model, "Honda Civic");
    }

    #[test]
    fn viewed_filter_is_tri_state() {
        let store = seeded_store();
        let first_id = store.query(&ChecksQuery::default()).checks[0].id;
        store.mark_viewed(first_id).unwrap();

        let unviewed = store.query(&ChecksQuery {
            viewed: Some(false),
            ..Default::default()
        });
        assert_eq!(unviewed.total, 2);

        let viewed = store.query(&ChecksQuery {
            viewed: Some(true),
            ..Default::default()
        });
        assert_eq!(viewed.total, 1);
        assert_eq!(viewed.checks[0].id, first_id);

        let either = store.query(&ChecksQuery::default());
        assert_eq!(either.total, 3);
    }

    #[test]
    fn pagination_clamps_zero_and_slices() {
        let store = seeded_store();
        let page = store.query(&ChecksQuery {
            page: Some(2),
            limit: Some(2),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        });
        assert_eq!(page.total, 3);
        assert_eq!(page.checks.len(), 1);
        assert_eq!(page.checks[0].plate_number, "DEF-456");

        // zero is treated as unset, matching the client side
        let page = store.query(&ChecksQuery {
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 100);
        assert_eq!(page.checks.len(), 3);
    }

    #[test]
    fn sorts_by_plate_number() {
        let page = seeded_store().query(&ChecksQuery {
            sort_by: Some("plate_number".to_string()),
            sort_order: Some(SortOrder::Asc),
            ..Default::default()
        });
        let plates: Vec<&str> = page
            .checks
            .iter()
            .map(|check| check.plate_number.as_str())
            .collect();
        assert_eq!(plates, vec!["ABC-123", "DEF-456", "GHI-789"]);
    }

    #[test]
    fn mark_viewed_unknown_id_errors() {
        let store = seeded_store();
        let result = store.mark_viewed(CheckId(Uuid::new_v4()));
        assert!(matches!(result, Err(StoreError::CheckNotFound)));
    }
}
