//! Component collection
//!
//! Components are stateless renderers that receive `AppState` as a
//! parameter. `Components::render` lays them out on one frame.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod blog_list;
pub mod confirm;
pub mod filter_bar;
pub mod form;
pub mod header;
pub mod help;
pub mod notification;

pub use blog_list::BlogListComponent;
pub use confirm::ConfirmComponent;
pub use filter_bar::FilterBarComponent;
pub use form::FormComponent;
pub use header::HeaderComponent;
pub use help::HelpComponent;
pub use notification::NotificationComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub filter_bar: FilterBarComponent,
    pub blog_list: BlogListComponent,
    pub notification: NotificationComponent,
    pub help: HelpComponent,
    pub form: FormComponent,
    pub confirm: ConfirmComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [header, filter, list, notification, help] = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Blog list
            Constraint::Length(1), // Notification
            Constraint::Length(1), // Key hints
        ])
        .areas(area);

        self.header.view(state, frame, header);
        self.filter_bar.view(state, frame, filter);
        self.blog_list.view(state, frame, list);
        self.notification.view(state, frame, notification);
        self.help.view(state, frame, help);

        // Overlays
        self.form.view(state, frame, area);
        self.confirm.view(state, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ui::{BlogFields, LoginFields, UiMode};
    use crate::domain::{Blog, BlogOwner, Notification, User};
    use ratatui::backend::TestBackend;
    use secrecy::SecretString;

    fn render(state: &AppState) -> color_eyre::Result<Vec<String>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        terminal.draw(|frame| Components::new().render(frame, state))?;

        let buffer = terminal.backend().buffer();
        let lines = buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect();
        Ok(lines)
    }

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|line| line.contains(text))
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "mluukkai".into(),
            name: "Matti Luukkainen".into(),
            token: SecretString::from("t"),
        }
    }

    fn blog(id: &str, title: &str, likes: u64) -> Blog {
        Blog {
            id: id.into(),
            title: title.into(),
            author: "Edsger W. Dijkstra".into(),
            url: format!("https://example.com/{id}"),
            likes,
            user: Some(BlogOwner {
                id: "u1".into(),
                username: "mluukkai".into(),
                name: "Matti Luukkainen".into(),
            }),
        }
    }

    fn logged_in() -> AppState {
        let mut state = AppState::default();
        state.session.start(user());
        state.system.is_loading = false;
        state.blogs.replace_all(vec![
            blog("1", "Go To Statement Considered Harmful", 5),
            blog("2", "Canonical string reduction", 12),
        ]);
        state
    }

    #[test]
    fn test_logged_out_shows_placeholder() -> color_eyre::Result<()> {
        let lines = render(&AppState::default())?;

        assert!(contains(&lines, "not logged in"));
        assert!(contains(&lines, "Log in to see the blogs"));
        Ok(())
    }

    #[test]
    fn test_list_is_sorted_by_likes() -> color_eyre::Result<()> {
        let lines = render(&logged_in())?;

        let position = |text: &str| lines.iter().position(|line| line.contains(text));
        assert!(contains(&lines, "Matti Luukkainen logged in"));
        assert!(position("Canonical string reduction") < position("Go To Statement"));
        assert!(contains(&lines, "12 likes"));
        Ok(())
    }

    #[test]
    fn test_filter_status_is_shown() -> color_eyre::Result<()> {
        let mut state = logged_in();
        state.blogs.set_query("nothing matches");

        let lines = render(&state)?;

        assert!(contains(&lines, "No results"));
        assert!(contains(&lines, "No blogs to display"));
        Ok(())
    }

    #[test]
    fn test_login_form_masks_password() -> color_eyre::Result<()> {
        let mut state = AppState::default();
        state.ui.mode = UiMode::Login;
        state.ui.login_form.set_value(LoginFields::USERNAME, "mluukkai");
        state.ui.login_form.set_value(LoginFields::PASSWORD, "salainen");

        let lines = render(&state)?;

        assert!(contains(&lines, "Log in to application"));
        assert!(contains(&lines, "mluukkai"));
        assert!(!contains(&lines, "salainen"));
        assert!(contains(&lines, "••••••••"));
        Ok(())
    }

    #[test]
    fn test_new_blog_form() -> color_eyre::Result<()> {
        let mut state = logged_in();
        state.ui.mode = UiMode::NewBlog;
        state.ui.blog_form.set_value(BlogFields::TITLE, "Type wars");

        let lines = render(&state)?;

        assert!(contains(&lines, "Create new"));
        assert!(contains(&lines, "Type wars"));
        Ok(())
    }

    #[test]
    fn test_confirm_dialog_and_notification() -> color_eyre::Result<()> {
        let mut state = logged_in();
        state.ui.mode = UiMode::ConfirmDelete { id: "1".into() };
        state.notification.show(Notification::info("Blog deleted"));

        let lines = render(&state)?;

        assert!(contains(
            &lines,
            "Delete Go To Statement Considered Harmful? (y/n)"
        ));
        assert!(contains(&lines, "Blog deleted"));
        Ok(())
    }
}
