//! FilterPredicate - optional caller-supplied accept/reject test
//!
//! Absence of a filter is a value (`AcceptAll`), not a null to coalesce at
//! every call site.

use std::fmt;
use std::rc::Rc;

/// Decides whether an extracted word becomes an element
#[derive(Clone, Default)]
pub enum FilterPredicate {
    #[default]
    AcceptAll,
    Predicate(Rc<dyn Fn(&str) -> bool>),
}

impl FilterPredicate {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        FilterPredicate::Predicate(Rc::new(predicate))
    }

    /// Reject every word listed in `words` (exact match)
    pub fn deny<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let denied: Vec<String> = words.into_iter().map(Into::into).collect();
        Self::new(move |word| !denied.iter().any(|d| d == word))
    }

    pub fn accepts(&self, word: &str) -> bool {
        match self {
            FilterPredicate::AcceptAll => true,
            FilterPredicate::Predicate(predicate) => predicate(word),
        }
    }

    pub fn is_accept_all(&self) -> bool {
        matches!(self, FilterPredicate::AcceptAll)
    }
}

impl From<Option<Rc<dyn Fn(&str) -> bool>>> for FilterPredicate {
    fn from(predicate: Option<Rc<dyn Fn(&str) -> bool>>) -> Self {
        predicate.map_or(FilterPredicate::AcceptAll, FilterPredicate::Predicate)
    }
}

impl fmt::Debug for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPredicate::AcceptAll => f.write_str("AcceptAll"),
            FilterPredicate::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
