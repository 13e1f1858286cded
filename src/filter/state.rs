//! Filter criteria held as explicit state, with the result derived from them.

use crate::models::{Book, SearchCriteria, ALL_CATEGORIES};

use super::{matching_indices, results_summary};

/// Current query and category over a borrowed collection.
///
/// Every transition recomputes the matching set; nothing is maintained
/// incrementally.
#[derive(Debug, Clone)]
pub struct FilterState<'a> {
    records: &'a [Book],
    query: String,
    category: String,
    matches: Vec<usize>,
}

impl<'a> FilterState<'a> {
    /// Empty query and the sentinel category: every record matches
    pub fn new(records: &'a [Book]) -> Self {
        Self::with_criteria(records, &SearchCriteria::default())
    }

    pub fn with_criteria(records: &'a [Book], criteria: &SearchCriteria) -> Self {
        let category = match criteria.category() {
            "" => ALL_CATEGORIES.to_string(),
            c => c.to_string(),
        };
        let mut state = Self {
            records,
            query: criteria.query().to_string(),
            category,
            matches: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.recompute();
    }

    /// Back to an empty query and the sentinel category
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = ALL_CATEGORIES.to_string();
        self.recompute();
    }

    pub fn replace_records(&mut self, records: &'a [Book]) {
        self.records = records;
        self.recompute();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn results(&self) -> impl Iterator<Item = &'a Book> + '_ {
        let records = self.records;
        self.matches.iter().map(move |&index| &records[index])
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn summary(&self) -> String {
        results_summary(self.count())
    }

    fn recompute(&mut self) {
        self.matches = matching_indices(self.records, &self.query, &self.category);
        tracing::debug!(
            query = %self.query,
            category = %self.category,
            matches = self.matches.len(),
            "catalog filter recomputed"
        );
    }
}
