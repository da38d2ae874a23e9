//! Cursor over the displayed blog list

/// Selected row of the displayed (filtered and sorted) list.
///
/// All operations take the current number of displayed rows, because that
/// number changes whenever the list or the filter changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn deselect(&mut self) {
        self.selected_index = None;
    }

    pub fn scroll_up(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(index) => Some(index.saturating_sub(1)),
            None => Some(0),
        };
    }

    pub fn scroll_down(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(index) => Some((index + 1).min(len - 1)),
            None => Some(0),
        };
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected_index = (len > 0).then_some(0);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.checked_sub(1);
    }

    /// Keeps the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        if let Some(index) = self.selected_index {
            self.selected_index = if len == 0 {
                None
            } else {
                Some(index.min(len - 1))
            };
        }
    }
}
