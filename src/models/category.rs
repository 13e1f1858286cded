//! Category labels

use serde::Serialize;

/// The "no filter" category value
pub const ALL_CATEGORIES: &str = "All Categories";

/// Ordered set of valid category labels. The first entry is always the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Categories(Vec<String>);

impl Categories {
    /// Build from labels, putting the sentinel first and dropping repeats
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec![ALL_CATEGORIES.to_string()];
        for label in labels {
            let label = label.into();
            if !all.contains(&label) {
                all.push(label);
            }
        }
        Self(all)
    }

    pub fn is_sentinel(label: &str) -> bool {
        label == ALL_CATEGORIES
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|c| c == label)
    }

    /// Labels a book may carry (everything but the sentinel)
    pub fn selectable(&self) -> &[String] {
        &self.0[1..]
    }

    /// Default category of the admin form
    pub fn default_selectable(&self) -> Option<&str> {
        self.selectable().first().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
