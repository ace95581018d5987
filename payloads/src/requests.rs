use serde::{Deserialize, Serialize};

use crate::{CodeState, PaymentState, SortOrder};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 100;
pub const DEFAULT_SORT_BY: &str = "created_at";

/// Filter, sort, and pagination options for the check listing endpoint.
///
/// Every field is optional; an unset field is left out of the request
/// entirely. Defaults are merged in at the call boundary (see
/// [`ChecksQuery::listing_defaults`]), never inside the builder, so the
/// serialized form of a query is exactly what the caller asked for.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct ChecksQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<SortOrder>,
    pub viewed: Option<bool>,
    pub code_state: Option<CodeState>,
    pub payment_state: Option<PaymentState>,
}

impl ChecksQuery {
    /// The fixed defaults for list views: first page, 100 per page,
    /// newest first.
    pub fn listing_defaults() -> Self {
        ChecksQuery {
            page: Some(DEFAULT_PAGE),
            limit: Some(DEFAULT_LIMIT),
            sort_by: Some(DEFAULT_SORT_BY.to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        }
    }

    /// Shallow merge: fields set on `self` win over `defaults`.
    pub fn or_defaults(&self, defaults: &ChecksQuery) -> ChecksQuery {
        ChecksQuery {
            page: self.page.or(defaults.page),
            limit: self.limit.or(defaults.limit),
            search: self.search.clone().or_else(|| defaults.search.clone()),
            sort_by: self.sort_by.clone().or_else(|| defaults.sort_by.clone()),
            sort_order: self.sort_order.or(defaults.sort_order),
            viewed: self.viewed.or(defaults.viewed),
            code_state: self.code_state.or(defaults.code_state),
            payment_state: self.payment_state.or(defaults.payment_state),
        }
    }

    /// Query parameters in their fixed wire order: page, limit, search,
    /// sortBy, sortOrder, viewed, code_state, payment_state.
    ///
    /// Zero and empty-string values count as unset for every field except
    /// `viewed`, where `false` is a real filter ("only reports nobody has
    /// opened yet") and must survive serialization. Don't normalize the
    /// `viewed` handling to match the other fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page.filter(|p| *p != 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) =
            self.search.as_deref().filter(|s| !s.is_empty())
        {
            pairs.push(("search", search.to_string()));
        }
        if let Some(sort_by) =
            self.sort_by.as_deref().filter(|s| !s.is_empty())
        {
            pairs.push(("sortBy", sort_by.to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }
        if let Some(viewed) = self.viewed {
            pairs.push(("viewed", viewed.to_string()));
        }
        if let Some(code_state) = self.code_state {
            pairs.push(("code_state", code_state.as_str().to_string()));
        }
        if let Some(payment_state) = self.payment_state {
            pairs.push(("payment_state", payment_state.as_str().to_string()));
        }
        pairs
    }

    /// URL-encoded query string; empty when no parameter qualifies.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }
}
