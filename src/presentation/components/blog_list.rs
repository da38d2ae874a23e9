//! Blog list component
//!
//! Displays the filtered, sorted list with the selection highlighted.

use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListView};

use crate::{core::state::AppState, presentation::widgets::blog_item::BlogItem};

/// Stateless list view over `AppState::visible_blogs`
#[derive(Debug, Clone, Default)]
pub struct BlogListComponent;

impl BlogListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let padding = Padding::horizontal(1);
        let styles = &state.config.config.styles;

        if !state.is_logged_in() {
            Self::placeholder(frame, area, "Log in to see the blogs", styles.style("muted"));
            return;
        }

        let items: Vec<BlogItem> = state
            .visible_blogs()
            .into_iter()
            .map(|blog| {
                BlogItem::new(blog.clone(), state.can_delete(blog))
                    .styles(styles.style("title"), styles.style("highlight"))
            })
            .collect();
        let item_count = items.len();

        if item_count == 0 {
            Self::placeholder(frame, area, "No blogs to display", styles.style("muted"));
            return;
        }

        let builder = ListBuilder::new(move |context| {
            let mut item = items[context.index].clone();
            item.highlight = context.is_selected;
            (item, BlogItem::HEIGHT)
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.blogs.selected_index());

        let list = ListView::new(builder, item_count).block(Block::default().padding(padding));

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn placeholder(frame: &mut Frame, area: Rect, message: &str, style: Style) {
        let text = Paragraph::new(message)
            .style(style)
            .alignment(Alignment::Center);
        let inner = Block::default().padding(Padding::top(1)).inner(area);
        frame.render_widget(text, inner);
    }
}
