pub mod selection;

use crate::domain::{
    view::{self, FilterStatus},
    Blog,
};
use selection::SelectionState;

/// Local snapshot of the server's blog list.
///
/// `blogs` keeps the order the server returned; the displayed order is
/// computed by [`view::visible_blogs`]. The selection indexes the displayed
/// list.
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    blogs: Vec<Blog>,
    query: String,
    selection: SelectionState,
}

impl BlogState {
    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    pub fn replace_all(&mut self, blogs: Vec<Blog>) {
        self.blogs = blogs;
        self.clamp_selection();
    }

    pub fn push(&mut self, blog: Blog) {
        self.blogs.push(blog);
    }

    /// Replaces the record with the same id. Returns false if there is none.
    pub fn replace(&mut self, blog: Blog) -> bool {
        match self.blogs.iter_mut().find(|b| b.id == blog.id) {
            Some(slot) => {
                *slot = blog;
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, returning it
    pub fn remove(&mut self, id: &str) -> Option<Blog> {
        let index = self.blogs.iter().position(|blog| blog.id == id)?;
        let removed = self.blogs.remove(index);
        self.clamp_selection();
        Some(removed)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_selection();
    }

    pub fn visible(&self) -> Vec<&Blog> {
        view::visible_blogs(&self.blogs, &self.query)
    }

    pub fn visible_len(&self) -> usize {
        view::filter(&self.blogs, &self.query).len()
    }

    pub fn filter_status(&self) -> FilterStatus {
        view::filter_status(&self.query, self.visible_len())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// The selected row of the displayed list
    pub fn selected(&self) -> Option<&Blog> {
        let index = self.selection.selected_index()?;
        self.visible().get(index).copied()
    }

    pub fn scroll_up(&mut self) {
        let len = self.visible_len();
        self.selection.scroll_up(len);
    }

    pub fn scroll_down(&mut self) {
        let len = self.visible_len();
        self.selection.scroll_down(len);
    }

    pub fn scroll_to_top(&mut self) {
        let len = self.visible_len();
        self.selection.select_first(len);
    }

    pub fn scroll_to_bottom(&mut self) {
        let len = self.visible_len();
        self.selection.select_last(len);
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selection.clamp(len);
    }
}
