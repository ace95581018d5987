//! Structural cache keys for check report queries.
//!
//! Keys form a prefix hierarchy so a caching layer can invalidate
//! coarsely: dropping everything under [`QueryKey::lists`] covers every
//! concrete option combination without enumerating them, while each
//! merged option set still gets its own entry so two views of the same
//! filtered list share one fetch.

use crate::requests::ChecksQuery;

/// Top-level tag identifying the check-report domain.
pub const RESOURCE_TAG: &str = "vhc";

const LIST_TAG: &str = "list";
const PAGINATED_TAG: &str = "paginated";

/// One element of a key: a fixed stage tag or a structural snapshot of
/// the merged query options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Tag(&'static str),
    Query(ChecksQuery),
}

/// Hierarchical identity of a query, compared element-by-element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeyPart>);

impl QueryKey {
    /// Everything in the check-report domain.
    pub fn all() -> Self {
        QueryKey(vec![KeyPart::Tag(RESOURCE_TAG)])
    }

    /// Every list view, regardless of options.
    pub fn lists() -> Self {
        QueryKey(vec![KeyPart::Tag(RESOURCE_TAG), KeyPart::Tag(LIST_TAG)])
    }

    /// One specific list, identified by its merged options.
    pub fn list(query: ChecksQuery) -> Self {
        QueryKey(vec![
            KeyPart::Tag(RESOURCE_TAG),
            KeyPart::Tag(LIST_TAG),
            KeyPart::Tag(PAGINATED_TAG),
            KeyPart::Query(query),
        ])
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    /// True when `other` equals or extends this key. Invalidating `self`
    /// is understood to affect every key it is a prefix of.
    pub fn is_prefix_of(&self, other: &QueryKey) -> bool {
        other.0.len() >= self.0.len()
            && other.0[..self.0.len()] == self.0[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_merged_options_produce_equal_keys() {
        let options = ChecksQuery {
            page: Some(2),
            search: Some("van".to_string()),
            ..Default::default()
        };
        let merged_a =
            options.or_defaults(&ChecksQuery::listing_defaults());
        let merged_b = ChecksQuery {
            page: Some(2),
            search: Some("van".to_string()),
            ..Default::default()
        }
        .or_defaults(&ChecksQuery::listing_defaults());

        assert_eq!(QueryKey::list(merged_a), QueryKey::list(merged_b));
    }

    #[test]
    fn one_differing_field_produces_distinct_keys() {
        let base = ChecksQuery::listing_defaults();
        let other = ChecksQuery {
            viewed: Some(false),
            ..base.clone()
        };
        assert_ne!(QueryKey::list(base), QueryKey::list(other));
    }

    #[test]
    fn keys_form_a_prefix_hierarchy() {
        let concrete = QueryKey::list(ChecksQuery::listing_defaults());

        assert!(QueryKey::all().is_prefix_of(&QueryKey::lists()));
        assert!(QueryKey::all().is_prefix_of(&concrete));
        assert!(QueryKey::lists().is_prefix_of(&concrete));
        assert!(concrete.is_prefix_of(&concrete));

        assert!(!QueryKey::lists().is_prefix_of(&QueryKey::all()));
        assert!(!concrete.is_prefix_of(&QueryKey::lists()));
    }

    #[test]
    fn stage_tags_are_ordered() {
        let concrete = QueryKey::list(ChecksQuery::default());
        let parts = concrete.parts();
        assert_eq!(parts[0], KeyPart::Tag(RESOURCE_TAG));
        assert_eq!(parts[1], KeyPart::Tag("list"));
        assert_eq!(parts[2], KeyPart::Tag("paginated"));
        assert!(matches!(parts[3], KeyPart::Query(_)));
    }
}
