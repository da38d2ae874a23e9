//! Derived views over the blog list
//!
//! Everything here is a pure function of the stored list and the filter
//! query. The stored list keeps server order; sorting and filtering only
//! happen when a view is built.

use crate::domain::blog::Blog;

/// Status text shown next to the filter input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    /// No query entered
    Inactive,
    NoResults,
    InUse,
}

impl FilterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FilterStatus::Inactive => "",
            FilterStatus::NoResults => "No results",
            FilterStatus::InUse => "Filter in use",
        }
    }
}

/// Blogs whose title contains `query`, ignoring case, in their stored order
pub fn filter<'a>(blogs: &'a [Blog], query: &str) -> Vec<&'a Blog> {
    if query.is_empty() {
        return blogs.iter().collect();
    }

    let needle = query.to_lowercase();
    blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_status(query: &str, result_len: usize) -> FilterStatus {
    match (query.is_empty(), result_len) {
        (true, _) => FilterStatus::Inactive,
        (false, 0) => FilterStatus::NoResults,
        (false, _) => FilterStatus::InUse,
    }
}

/// Sorts by likes, most liked first. Ties keep their relative order.
pub fn sort_by_likes(blogs: &mut [&Blog]) {
    blogs.sort_by(|a, b| b.likes.cmp(&a.likes));
}

/// The list as displayed: filtered by title, then sorted by likes
pub fn visible_blogs<'a>(blogs: &'a [Blog], query: &str) -> Vec<&'a Blog> {
    let mut visible = filter(blogs, query);
    sort_by_likes(&mut visible);
    visible
}
