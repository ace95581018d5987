use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{CheckId, CodeState, PaymentState};

/// A single vehicle history check report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub id: CheckId,
    pub plate_number: String,
    pub vehicle_model: String,
    /// Whether the requesting user has opened this report yet
    pub viewed: bool,
    pub code_state: CodeState,
    pub payment_state: PaymentState,
    pub created_at: Timestamp,
}

/// One page of the check listing.
///
/// `page` and `limit` echo the effective values after server-side
/// defaulting, so the client can compute page counts without knowing the
/// server's fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPage {
    pub checks: Vec<Check>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl CheckPage {
    /// Number of pages needed for `total` records at this page size.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(total: u64, limit: u32) -> CheckPage {
        CheckPage {
            checks: vec![],
            total,
            page: 1,
            limit,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page_with(0, 100).total_pages(), 0);
        assert_eq!(page_with(100, 100).total_pages(), 1);
        assert_eq!(page_with(101, 100).total_pages(), 2);
    }

    #[test]
    fn total_pages_does_not_truncate_large_totals() {
        let page = page_with(u32::MAX as u64 + 1, 1);
        assert_eq!(page.total_pages(), u32::MAX as u64 + 1);
    }

    #[test]
    fn zero_limit_means_no_pages() {
        assert_eq!(page_with(50, 0).total_pages(), 0);
    }
}
