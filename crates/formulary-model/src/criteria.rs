use serde::{Deserialize, Serialize};

/// One case-insensitive substring predicate bound to a display column.
///
/// An empty needle imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub column: String,
    pub needle: String,
}

/// Zero or more predicates combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub predicates: Vec<FilterPredicate>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substring predicate on `column`.
    #[must_use]
    pub fn contains(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.predicates.push(FilterPredicate {
            column: column.into(),
            needle: needle.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
