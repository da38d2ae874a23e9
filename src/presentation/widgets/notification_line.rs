use ratatui::{prelude::*, widgets::*};

use crate::domain::Notification;

/// The current notification on a single line
pub struct NotificationLine<'a> {
    notification: &'a Notification,
    style: Style,
}

impl<'a> NotificationLine<'a> {
    pub fn new(notification: &'a Notification, style: Style) -> Self {
        Self {
            notification,
            style,
        }
    }
}

impl Widget for NotificationLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(Line::styled(
            self.notification.message.as_str(),
            self.style,
        ))
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_message_with_style() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let notification = Notification::error("boom");

        NotificationLine::new(&notification, Style::default().fg(Color::Red)).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "b");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
