use crate::domain::NewBlog;

/// Snapshot of a single-line text field.
///
/// The field itself is rebuilt from this snapshot by a
/// [`TextAreaEngine`](crate::core::textarea_engine::TextAreaEngine) every
/// time keys are applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    pub content: String,
    /// Cursor column, in characters
    pub cursor: usize,
}

impl TextAreaState {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct LoginFields;

impl LoginFields {
    pub const USERNAME: usize = 0;
    pub const PASSWORD: usize = 1;
    pub const LABELS: [&'static str; 2] = ["username", "password"];
}

pub struct BlogFields;

impl BlogFields {
    pub const TITLE: usize = 0;
    pub const AUTHOR: usize = 1;
    pub const URL: usize = 2;
    pub const LABELS: [&'static str; 3] = ["title", "author", "url"];
}

/// A form made of labelled single-line fields with one focused field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<TextAreaState>,
    focus: usize,
}

impl FormState {
    pub fn with_fields(count: usize) -> Self {
        Self {
            fields: vec![TextAreaState::default(); count],
            focus: 0,
        }
    }

    pub fn login() -> Self {
        Self::with_fields(LoginFields::LABELS.len())
    }

    pub fn new_blog() -> Self {
        Self::with_fields(BlogFields::LABELS.len())
    }

    pub fn fields(&self) -> &[TextAreaState] {
        &self.fields
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|field| field.content.as_str())
            .unwrap_or_default()
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            *field = TextAreaState::new(value);
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&TextAreaState> {
        self.fields.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut TextAreaState> {
        self.fields.get_mut(self.focus)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn reset(&mut self) {
        self.fields.iter_mut().for_each(TextAreaState::clear);
        self.focus = 0;
    }
}

/// High-level UI mode for keybindings and view switching
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Browse,
    Login,
    NewBlog,
    Filter,
    /// Waiting for y/n before deleting the blog with this id
    ConfirmDelete { id: String },
}

/// UI-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub mode: UiMode,
    pub login_form: FormState,
    pub blog_form: FormState,
    pub filter_input: TextAreaState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mode: UiMode::default(),
            login_form: FormState::login(),
            blog_form: FormState::new_blog(),
            filter_input: TextAreaState::default(),
        }
    }
}

impl UiState {
    pub fn is_browsing(&self) -> bool {
        self.mode == UiMode::Browse
    }

    /// Whether keys go to a text field rather than to keybindings
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, UiMode::Login | UiMode::NewBlog | UiMode::Filter)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        match &self.mode {
            UiMode::ConfirmDelete { id } => Some(id),
            _ => None,
        }
    }

    /// The text field that receives typed keys in the current mode
    pub fn active_input(&self) -> Option<&TextAreaState> {
        match self.mode {
            UiMode::Login => self.login_form.focused(),
            UiMode::NewBlog => self.blog_form.focused(),
            UiMode::Filter => Some(&self.filter_input),
            UiMode::Browse | UiMode::ConfirmDelete { .. } => None,
        }
    }

    pub fn active_input_mut(&mut self) -> Option<&mut TextAreaState> {
        match self.mode {
            UiMode::Login => self.login_form.focused_mut(),
            UiMode::NewBlog => self.blog_form.focused_mut(),
            UiMode::Filter => Some(&mut self.filter_input),
            UiMode::Browse | UiMode::ConfirmDelete { .. } => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormState> {
        match self.mode {
            UiMode::Login => Some(&mut self.login_form),
            UiMode::NewBlog => Some(&mut self.blog_form),
            _ => None,
        }
    }

    pub fn login_input(&self) -> (String, String) {
        (
            self.login_form.value(LoginFields::USERNAME).to_string(),
            self.login_form.value(LoginFields::PASSWORD).to_string(),
        )
    }

    pub fn blog_draft(&self) -> NewBlog {
        NewBlog::new(
            self.blog_form.value(BlogFields::TITLE),
            self.blog_form.value(BlogFields::AUTHOR),
            self.blog_form.value(BlogFields::URL),
        )
    }
}
