//! Catalog filtering.
//!
//! A query matches a book when it is a case-insensitive substring of the title
//! or the author, or a literal substring of the raw ISBN. A category matches on
//! exact equality unless it is the "All Categories" sentinel. Both criteria are
//! AND-ed and the input order is preserved.

pub mod state;

use crate::models::{Book, Categories};

pub use state::FilterState;

/// Text criterion, lower-cased once per query
struct QueryMatcher<'q> {
    raw: &'q str,
    lowered: String,
}

impl<'q> QueryMatcher<'q> {
    fn new(raw: &'q str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            lowered: raw.to_lowercase(),
        })
    }

    fn matches(&self, book: &Book) -> bool {
        book.title.to_lowercase().contains(&self.lowered)
            || book.author.to_lowercase().contains(&self.lowered)
            || book.isbn.contains(self.raw)
    }
}

fn category_constraint(category: &str) -> Option<&str> {
    if category.is_empty() || Categories::is_sentinel(category) {
        None
    } else {
        Some(category)
    }
}

/// Positions in `records` that satisfy both criteria, in input order
pub fn matching_indices(records: &[Book], query: &str, category: &str) -> Vec<usize> {
    let matcher = QueryMatcher::new(query);
    let category = category_constraint(category);

    records
        .iter()
        .enumerate()
        .filter(|(_, book)| matcher.as_ref().map_or(true, |m| m.matches(book)))
        .filter(|(_, book)| category.map_or(true, |c| book.category == c))
        .map(|(index, _)| index)
        .collect()
}

/// Subset of `records` matching `query` and `category`, order preserved
pub fn filter<'a>(records: &'a [Book], query: &str, category: &str) -> Vec<&'a Book> {
    matching_indices(records, query, category)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// "N books found" readout
pub fn results_summary(count: usize) -> String {
    match count {
        1 => "1 book found".to_string(),
        n => format!("{} books found", n),
    }
}
