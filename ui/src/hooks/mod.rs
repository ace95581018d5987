pub mod use_checks;
pub mod use_keyed_fetch;

pub use use_checks::{use_checks, use_checks_with_config};
pub use use_keyed_fetch::{FetchHookReturn, QueryConfig, use_keyed_fetch};

/// Distinguishes "never fetched" from "fetched but empty".
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
