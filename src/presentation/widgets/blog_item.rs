use ratatui::{prelude::*, widgets::*};

use crate::domain::Blog;
use crate::presentation::widgets::blog_stats::BlogStats;

/// One entry of the blog list: title and author, url, likes, separator
#[derive(Clone, Debug)]
pub struct BlogItem {
    pub blog: Blog,
    /// Whether the session user owns this blog
    pub owned: bool,
    pub highlight: bool,
    pub title_style: Style,
    pub highlight_style: Style,
}

impl BlogItem {
    pub const HEIGHT: u16 = 4;

    pub fn new(blog: Blog, owned: bool) -> Self {
        BlogItem {
            blog,
            owned,
            highlight: false,
            title_style: Style::default().bold(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn styles(mut self, title_style: Style, highlight_style: Style) -> Self {
        self.title_style = title_style;
        self.highlight_style = highlight_style;
        self
    }

    fn owner_name(&self) -> Option<String> {
        let owner = self.blog.user.as_ref()?;
        [&owner.name, &owner.username]
            .into_iter()
            .find(|name| !name.is_empty())
            .cloned()
    }
}

impl Widget for BlogItem {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.highlight {
            self.title_style.patch(self.highlight_style)
        } else {
            self.title_style
        };

        let mut heading = vec![
            Span::styled(self.blog.title.clone(), title_style),
            Span::raw(" "),
            Span::styled(
                format!("by {}", self.blog.author),
                Style::default().fg(Color::Gray),
            ),
        ];
        if self.owned {
            heading.push(Span::styled(" (yours)", Style::default().fg(Color::Cyan)));
        }

        let mut text = Text::from(Line::from(heading));
        text.extend(Text::from(Line::styled(
            self.blog.url.clone(),
            Style::default().fg(Color::Blue).underlined(),
        )));
        let stats: Text = BlogStats::new(self.blog.likes, self.owner_name()).into();
        text.extend(stats);
        text.extend(Text::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(text).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlogOwner;
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn blog() -> Blog {
        Blog {
            id: "1".into(),
            title: "React patterns".into(),
            author: "Michael Chan".into(),
            url: "https://reactpatterns.com/".into(),
            likes: 7,
            user: Some(BlogOwner {
                id: "u1".into(),
                username: "mchan".into(),
                name: String::new(),
            }),
        }
    }

    #[test]
    fn test_renders_all_lines() {
        let area = Rect::new(0, 0, 50, BlogItem::HEIGHT);
        let mut buf = Buffer::empty(area);

        BlogItem::new(blog(), true).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "React patterns by Michael Chan (yours)");
        assert_eq!(row(&buf, 1), "https://reactpatterns.com/");
        assert_eq!(row(&buf, 2), "7 likes added by mchan");
        assert_eq!(row(&buf, 3), "─".repeat(50));
    }

    #[test]
    fn test_highlight_patches_title_style() {
        let area = Rect::new(0, 0, 50, BlogItem::HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut item = BlogItem::new(blog(), false);
        item.highlight = true;

        item.render(area, &mut buf);

        assert!(buf[(0, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(0, 1)].modifier.contains(Modifier::REVERSED));
    }
}
