use secrecy::ExposeSecret;

use crate::{
    core::{
        cmd::Cmd,
        msg::{blog::BlogMsg, session::SessionMsg, ui::UiMsg, Msg},
        state::{
            ui::{TextAreaState, UiMode},
            AppState,
        },
        textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
    },
    domain::{Blog, BlogOwner, ClientError, NewBlog, Notification, User},
};

pub const MISSING_CREDENTIALS: &str = "insert username and password";
pub const WRONG_CREDENTIALS: &str = "wrong username or password";
pub const LOGIN_EXPIRED: &str = "Login expired, please wait, logging out...";
pub const NOT_OWNER: &str = "You can only delete your own blogs";

/// Dependencies the update function needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Notification messages (delegated to NotificationState)
        Msg::Notification(notification_msg) => state.notification.update(notification_msg),

        Msg::Blog(blog_msg) => update_blogs(blog_msg, &mut state),
        Msg::Session(session_msg) => update_session(session_msg, &mut state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state, ctx),
    };
    (state, commands)
}

fn update_blogs(msg: BlogMsg, state: &mut AppState) -> Vec<Cmd> {
    let generation = state.session.generation();

    match msg {
        BlogMsg::Refresh => vec![Cmd::FetchBlogs { generation }],

        BlogMsg::Add(blog) => add_blog(blog, state),

        BlogMsg::Like(id) => {
            if !state.is_logged_in() {
                return vec![];
            }
            match state.blogs.find(&id) {
                Some(blog) => vec![Cmd::UpdateBlog {
                    generation,
                    blog: blog.liked(),
                }],
                None => {
                    log::debug!("like: no blog with id {id}");
                    vec![]
                }
            }
        }

        BlogMsg::SetFilter(query) => {
            state.ui.filter_input = TextAreaState::new(query.clone());
            state.blogs.set_query(query);
            vec![]
        }

        // Navigation
        BlogMsg::ScrollUp => {
            state.blogs.scroll_up();
            vec![]
        }
        BlogMsg::ScrollDown => {
            state.blogs.scroll_down();
            vec![]
        }
        BlogMsg::ScrollToTop => {
            state.blogs.scroll_to_top();
            vec![]
        }
        BlogMsg::ScrollToBottom => {
            state.blogs.scroll_to_bottom();
            vec![]
        }

        // API results
        BlogMsg::Fetched { generation, result } => {
            if is_stale(state, generation, "Fetched") {
                return vec![];
            }
            state.system.is_loading = false;
            match result {
                Ok(blogs) => {
                    log::info!("fetched {} blogs", blogs.len());
                    state.blogs.replace_all(blogs);
                    vec![]
                }
                Err(err) => handle_error(err, state),
            }
        }

        BlogMsg::Created { generation, result } => {
            if is_stale(state, generation, "Created") {
                return vec![];
            }
            match result {
                Ok(blog) => {
                    let blog = with_creator(blog, state.current_user());
                    state.blogs.push(blog);
                    state.ui.blog_form.reset();
                    if state.ui.mode == UiMode::NewBlog {
                        state.ui.mode = UiMode::Browse;
                    }
                    state.notification.show(Notification::success("New blog added"))
                }
                Err(err) => handle_error(err, state),
            }
        }

        BlogMsg::Updated { generation, result } => {
            if is_stale(state, generation, "Updated") {
                return vec![];
            }
            match result {
                Ok(blog) => {
                    let known = state.blogs.find(&blog.id).and_then(|b| b.user.clone());
                    let blog = blog.with_known_owner(known.as_ref());
                    if !state.blogs.replace(blog) {
                        log::debug!("updated blog is no longer in the list");
                    }
                    vec![]
                }
                Err(err) => handle_error(err, state),
            }
        }

        BlogMsg::Deleted {
            generation,
            blog,
            result,
        } => {
            if is_stale(state, generation, "Deleted") {
                return vec![];
            }
            match result {
                Ok(()) => {
                    state.blogs.remove(&blog.id);
                    state.notification.show(Notification::info("Blog deleted"))
                }
                Err(err) if err.is_stale_record() => {
                    state.blogs.remove(&blog.id);
                    state.notification.show(Notification::error(format!(
                        "Blog '{}' was already deleted from server",
                        blog.title
                    )))
                }
                Err(err) => handle_error(err, state),
            }
        }
    }
}

fn add_blog(blog: NewBlog, state: &mut AppState) -> Vec<Cmd> {
    if !state.is_logged_in() {
        return vec![];
    }
    if let Err(err) = blog.validate() {
        return state.notification.show(Notification::error(err.to_string()));
    }
    vec![Cmd::CreateBlog {
        generation: state.session.generation(),
        blog,
    }]
}

/// The create response names its owner by id only; the creator is the session user
fn with_creator(mut blog: Blog, creator: Option<&User>) -> Blog {
    let Some(creator) = creator else {
        return blog;
    };
    let owner = blog.user.take().unwrap_or_default();
    if !owner.username.is_empty() {
        blog.user = Some(owner);
        return blog;
    }
    let id = if owner.id.is_empty() {
        creator.id.clone()
    } else {
        owner.id
    };
    blog.user = Some(BlogOwner {
        id,
        username: creator.username.clone(),
        name: creator.name.clone(),
    });
    blog
}

fn delete_blog(id: &str, state: &mut AppState) -> Vec<Cmd> {
    let Some(blog) = state.blogs.find(id).cloned() else {
        log::debug!("delete: no blog with id {id}");
        return vec![];
    };
    if !state.can_delete(&blog) {
        return state.notification.show(Notification::error(NOT_OWNER));
    }
    vec![Cmd::DeleteBlog {
        generation: state.session.generation(),
        blog,
    }]
}

fn update_session(msg: SessionMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        SessionMsg::Restore => vec![Cmd::RestoreSession],

        SessionMsg::Restored(Some(user)) => {
            log::info!("restored session of {}", user.username);
            let token = user.token.clone();
            let generation = state.session.start(user);
            vec![
                Cmd::SetAuthToken { token: Some(token) },
                Cmd::FetchBlogs { generation },
            ]
        }

        SessionMsg::Restored(None) => vec![Cmd::FetchBlogs {
            generation: state.session.generation(),
        }],

        SessionMsg::Login { username, password } => {
            if username.is_empty() || password.expose_secret().is_empty() {
                return state
                    .notification
                    .show(Notification::error(MISSING_CREDENTIALS));
            }
            vec![Cmd::Login {
                generation: state.session.generation(),
                username,
                password,
            }]
        }

        SessionMsg::LoggedIn { generation, result } => {
            if is_stale(state, generation, "LoggedIn") {
                return vec![];
            }
            match result {
                Ok(user) => {
                    let message = format!("{} logged in", user.username);
                    let token = user.token.clone();
                    let generation = state.session.start(user.clone());
                    state.ui.login_form.reset();
                    if state.ui.mode == UiMode::Login {
                        state.ui.mode = UiMode::Browse;
                    }

                    let mut cmds = vec![
                        Cmd::PersistSession { user },
                        Cmd::SetAuthToken { token: Some(token) },
                        Cmd::FetchBlogs { generation },
                    ];
                    cmds.extend(state.notification.show(Notification::success(message)));
                    cmds
                }
                Err(err @ ClientError::Transport(_)) => {
                    state.notification.show(Notification::error(err.to_string()))
                }
                Err(err) => {
                    log::info!("login failed: {err}");
                    state
                        .notification
                        .show(Notification::error(WRONG_CREDENTIALS))
                }
            }
        }

        SessionMsg::Logout => {
            if !state.is_logged_in() {
                return vec![];
            }
            let mut cmds = end_session(state);
            cmds.extend(state.notification.show(Notification::info("Logged out.")));
            cmds
        }

        SessionMsg::Expire { generation } => {
            if is_stale(state, generation, "Expire") || !state.is_logged_in() {
                return vec![];
            }
            log::info!("logging out after token expiry");
            end_session(state)
        }
    }
}

fn end_session(state: &mut AppState) -> Vec<Cmd> {
    state.session.end();
    state.system.is_loading = false;
    state.ui.mode = UiMode::Browse;
    state.ui.blog_form.reset();
    vec![Cmd::ClearSession, Cmd::SetAuthToken { token: None }]
}

fn update_ui(msg: UiMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        UiMsg::ShowLogin => {
            if !state.is_logged_in() {
                state.ui.login_form.reset();
                state.ui.mode = UiMode::Login;
            }
            vec![]
        }

        UiMsg::ShowNewBlog => {
            if state.is_logged_in() {
                state.ui.mode = UiMode::NewBlog;
            }
            vec![]
        }

        UiMsg::StartFilter => {
            state.ui.filter_input = TextAreaState::new(state.blogs.query());
            state.ui.mode = UiMode::Filter;
            vec![]
        }

        UiMsg::RequestDelete(id) => {
            let Some(blog) = state.blogs.find(&id) else {
                return vec![];
            };
            if !state.can_delete(blog) {
                return state.notification.show(Notification::error(NOT_OWNER));
            }
            state.ui.mode = UiMode::ConfirmDelete { id };
            vec![]
        }

        UiMsg::ConfirmDelete => match std::mem::take(&mut state.ui.mode) {
            UiMode::ConfirmDelete { id } => delete_blog(&id, state),
            other => {
                state.ui.mode = other;
                vec![]
            }
        },

        UiMsg::Cancel => {
            if state.ui.mode == UiMode::Filter {
                state.ui.filter_input.clear();
                state.blogs.set_query("");
            }
            state.ui.mode = UiMode::Browse;
            vec![]
        }

        UiMsg::Submit => match state.ui.mode {
            UiMode::Login => {
                let (username, password) = state.ui.login_input();
                update_session(
                    SessionMsg::Login {
                        username,
                        password: password.into(),
                    },
                    state,
                )
            }
            UiMode::NewBlog => {
                let draft = state.ui.blog_draft();
                add_blog(draft, state)
            }
            UiMode::Filter => {
                state.ui.mode = UiMode::Browse;
                vec![]
            }
            UiMode::Browse | UiMode::ConfirmDelete { .. } => vec![],
        },

        UiMsg::NextField => {
            if let Some(form) = state.ui.active_form_mut() {
                form.next_field();
            }
            vec![]
        }

        UiMsg::PrevField => {
            if let Some(form) = state.ui.active_form_mut() {
                form.prev_field();
            }
            vec![]
        }

        UiMsg::ProcessInput(key) => {
            let Some(input) = state.ui.active_input() else {
                return vec![];
            };
            let edited = ctx.text_area.apply_keys(input, &[key]);
            if state.ui.mode == UiMode::Filter {
                state.blogs.set_query(edited.content.clone());
            }
            if let Some(input) = state.ui.active_input_mut() {
                *input = edited;
            }
            vec![]
        }
    }
}

/// Turns an API failure into a notification, starting the delayed logout
/// when the token has expired
fn handle_error(err: ClientError, state: &mut AppState) -> Vec<Cmd> {
    if err.is_token_expired() {
        let mut cmds = state.notification.show(Notification::error(LOGIN_EXPIRED));
        cmds.push(Cmd::ScheduleLogout {
            generation: state.session.generation(),
            delay_ms: state.notification.timeout_ms(),
        });
        return cmds;
    }

    let mut cmds = vec![Cmd::LogError {
        message: err.to_string(),
    }];
    cmds.extend(state.notification.show(Notification::error(err.to_string())));
    cmds
}

fn is_stale(state: &AppState, generation: u64, what: &str) -> bool {
    let stale = !state.session.is_current(generation);
    if stale {
        log::debug!(
            "dropping {what} from generation {generation}, current is {}",
            state.session.generation()
        );
    }
    stale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::msg::{notification::NotificationMsg, system::SystemMsg};
    use crate::core::state::ui::{BlogFields, LoginFields};
    use crate::domain::{AuthError, Blog, BlogOwner, NotificationStyle, User};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use secrecy::SecretString;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            name: String::new(),
            token: SecretString::from(format!("token-{username}")),
        }
    }

    fn blog(id: &str, title: &str, likes: u64, owner: &str) -> Blog {
        Blog {
            id: id.to_string(),
            title: title.to_string(),
            author: "author".to_string(),
            url: "http://example.com".to_string(),
            likes,
            user: Some(BlogOwner {
                id: owner.to_string(),
                username: format!("user-{owner}"),
                name: String::new(),
            }),
        }
    }

    fn logged_in_state() -> AppState {
        let mut state = AppState::default();
        state.session.start(user("u1", "root"));
        state.blogs.replace_all(vec![
            blog("b1", "Mine", 1, "u1"),
            blog("b2", "Theirs", 5, "u2"),
        ]);
        state
    }

    fn notification_of(state: &AppState) -> Option<(String, NotificationStyle)> {
        state
            .notification()
            .map(|n| (n.message.clone(), n.style))
    }

    fn has_network(cmds: &[Cmd]) -> bool {
        cmds.iter().any(Cmd::is_network)
    }

    #[test]
    fn test_add_with_missing_field_is_rejected_locally() {
        let state = logged_in_state();

        let (state, cmds) = update(
            Msg::Blog(BlogMsg::Add(NewBlog::new("title", "", "url"))),
            state,
        );

        assert!(!has_network(&cmds));
        assert_eq!(
            notification_of(&state),
            Some((NewBlog::MISSING_FIELDS.to_string(), NotificationStyle::Error))
        );
    }

    #[test]
    fn test_add_sends_create_with_current_generation() {
        let state = logged_in_state();
        let generation = state.session.generation();

        let (_, cmds) = update(
            Msg::Blog(BlogMsg::Add(NewBlog::new("t", "a", "u"))),
            state,
        );

        assert!(matches!(
            cmds.as_slice(),
            [Cmd::CreateBlog { generation: g, blog }] if *g == generation && blog.title == "t"
        ));
    }

    #[test]
    fn test_created_appends_and_closes_form() {
        let mut state = logged_in_state();
        state.ui.mode = UiMode::NewBlog;
        state.ui.blog_form.set_value(BlogFields::TITLE, "New");
        let generation = state.session.generation();

        let (state, _) = update(
            Msg::Blog(BlogMsg::Created {
                generation,
                result: Ok(blog("b3", "New", 0, "u1")),
            }),
            state,
        );

        assert_eq!(state.blogs.len(), 3);
        assert_eq!(state.ui.mode, UiMode::Browse);
        assert_eq!(state.ui.blog_form.value(BlogFields::TITLE), "");
        assert_eq!(
            notification_of(&state),
            Some(("New blog added".to_string(), NotificationStyle::Success))
        );
    }

    #[test]
    fn test_server_validation_error_keeps_form_open() {
        let mut state = logged_in_state();
        state.ui.mode = UiMode::NewBlog;
        state.ui.blog_form.set_value(BlogFields::TITLE, "x");
        let generation = state.session.generation();
        let message = "Blog validation failed: url: Path `url` is required.";

        let (state, _) = update(
            Msg::Blog(BlogMsg::Created {
                generation,
                result: Err(ClientError::from_response(400, message)),
            }),
            state,
        );

        assert_eq!(state.ui.mode, UiMode::NewBlog);
        assert_eq!(state.ui.blog_form.value(BlogFields::TITLE), "x");
        assert_eq!(
            notification_of(&state),
            Some((message.to_string(), NotificationStyle::Error))
        );
    }

    #[test]
    fn test_like_sends_incremented_copy() {
        let state = logged_in_state();

        let (state, cmds) = update(Msg::Blog(BlogMsg::Like("b2".into())), state);

        match cmds.as_slice() {
            [Cmd::UpdateBlog { blog, .. }] => {
                assert_eq!(blog.id, "b2");
                assert_eq!(blog.likes, 6);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
        // Not applied until the server answers
        assert_eq!(state.blogs.find("b2").map(|b| b.likes), Some(5));
    }

    #[test]
    fn test_updated_replaces_only_that_record() {
        let state = logged_in_state();
        let generation = state.session.generation();

        let (state, _) = update(
            Msg::Blog(BlogMsg::Updated {
                generation,
                result: Ok(blog("b1", "Mine", 2, "u1")),
            }),
            state,
        );

        assert_eq!(state.blogs.find("b1").map(|b| b.likes), Some(2));
        assert_eq!(state.blogs.find("b2").map(|b| b.likes), Some(5));
    }

    #[test]
    fn test_delete_requires_ownership() {
        let state = logged_in_state();

        let (state, cmds) = update(Msg::Ui(UiMsg::RequestDelete("b2".into())), state);

        assert!(cmds.iter().all(|cmd| !cmd.is_network()));
        assert_eq!(state.ui.mode, UiMode::Browse);
        assert_eq!(
            notification_of(&state),
            Some((NOT_OWNER.to_string(), NotificationStyle::Error))
        );
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let state = logged_in_state();

        let (state, cmds) = update(Msg::Ui(UiMsg::RequestDelete("b1".into())), state);
        assert!(cmds.is_empty());
        assert_eq!(state.ui.mode, UiMode::ConfirmDelete { id: "b1".into() });
        assert_eq!(state.pending_delete().map(|b| b.title.as_str()), Some("Mine"));

        let (state, cmds) = update(Msg::Ui(UiMsg::ConfirmDelete), state);
        assert_eq!(state.ui.mode, UiMode::Browse);
        assert!(matches!(cmds.as_slice(), [Cmd::DeleteBlog { blog, .. }] if blog.id == "b1"));
    }

    #[test]
    fn test_cancel_delete_sends_nothing() {
        let state = logged_in_state();
        let (state, _) = update(Msg::Ui(UiMsg::RequestDelete("b1".into())), state);

        let (state, cmds) = update(Msg::Ui(UiMsg::Cancel), state);

        assert!(cmds.is_empty());
        assert_eq!(state.ui.mode, UiMode::Browse);
        assert_eq!(state.blogs.len(), 2);
    }

    fn sends_delete(cmds: &[Cmd]) -> bool {
        cmds.iter().any(|cmd| matches!(cmd, Cmd::DeleteBlog { .. }))
    }

    #[rstest]
    #[case(Msg::Ui(UiMsg::RequestDelete("b1".into())))]
    #[case(Msg::Ui(UiMsg::ConfirmDelete))]
    #[case(Msg::Ui(UiMsg::Submit))]
    #[case(Msg::Blog(BlogMsg::Like("b1".into())))]
    #[case(Msg::Blog(BlogMsg::Refresh))]
    fn test_delete_is_never_sent_unconfirmed(#[case] msg: Msg) {
        let (state, cmds) = update(msg, logged_in_state());

        assert!(!sends_delete(&cmds));
        assert_eq!(state.blogs.len(), 2);
    }

    #[test]
    fn test_confirm_after_cancel_sends_nothing() {
        let state = logged_in_state();
        let (state, _) = update(Msg::Ui(UiMsg::RequestDelete("b1".into())), state);
        let (state, _) = update(Msg::Ui(UiMsg::Cancel), state);

        let (_, cmds) = update(Msg::Ui(UiMsg::ConfirmDelete), state);

        assert!(!sends_delete(&cmds));
    }

    #[test]
    fn test_deleted_removes_record() {
        let state = logged_in_state();
        let generation = state.session.generation();
        let target = blog("b1", "Mine", 1, "u1");

        let (state, _) = update(
            Msg::Blog(BlogMsg::Deleted {
                generation,
                blog: target,
                result: Ok(()),
            }),
            state,
        );

        assert!(state.blogs.find("b1").is_none());
        assert_eq!(state.blogs.len(), 1);
        assert_eq!(
            notification_of(&state),
            Some(("Blog deleted".to_string(), NotificationStyle::Info))
        );
    }

    #[test]
    fn test_stale_delete_still_removes_locally() {
        let state = logged_in_state();
        let generation = state.session.generation();

        let (state, _) = update(
            Msg::Blog(BlogMsg::Deleted {
                generation,
                blog: blog("b1", "Mine", 1, "u1"),
                result: Err(ClientError::from_response(404, "not found")),
            }),
            state,
        );

        assert!(state.blogs.find("b1").is_none());
        assert_eq!(
            notification_of(&state),
            Some((
                "Blog 'Mine' was already deleted from server".to_string(),
                NotificationStyle::Error
            ))
        );
    }

    #[test]
    fn test_created_blog_is_deletable_by_creator() -> serde_json::Result<()> {
        let mut state = AppState::default();
        state.session.start(user("", "root"));
        let generation = state.session.generation();
        let created: Blog = serde_json::from_str(
            r#"{"id":"b9","title":"New","author":"a","url":"u","likes":0,"user":"u1"}"#,
        )?;

        let (state, _) = update(
            Msg::Blog(BlogMsg::Created {
                generation,
                result: Ok(created),
            }),
            state,
        );

        let stored = state.blogs.find("b9").cloned();
        assert_eq!(
            stored.as_ref().and_then(|b| b.user.clone()),
            Some(BlogOwner {
                id: "u1".into(),
                username: "root".into(),
                name: String::new(),
            })
        );
        assert!(stored.is_some_and(|b| state.can_delete(&b)));
        Ok(())
    }

    #[test]
    fn test_created_blog_keeps_named_owner() {
        let state = logged_in_state();
        let generation = state.session.generation();

        let (state, _) = update(
            Msg::Blog(BlogMsg::Created {
                generation,
                result: Ok(blog("b3", "Other", 0, "u2")),
            }),
            state,
        );

        assert_eq!(
            state
                .blogs
                .find("b3")
                .and_then(|b| b.user.as_ref())
                .map(|owner| owner.username.as_str()),
            Some("user-u2")
        );
    }

    #[test]
    fn test_logout_before_first_fetch_clears_loading() {
        let mut state = AppState::default();
        state.session.start(user("u1", "root"));
        let generation = state.session.generation();
        assert!(state.system.is_loading);

        let (state, _) = update(Msg::Session(SessionMsg::Logout), state);
        let (state, cmds) = update(
            Msg::Blog(BlogMsg::Fetched {
                generation,
                result: Ok(vec![blog("b1", "Mine", 1, "u1")]),
            }),
            state,
        );

        assert!(cmds.is_empty());
        assert!(!state.system.is_loading);
        assert_eq!(state.blogs.len(), 0);
    }

    #[test]
    fn test_response_from_old_generation_is_dropped() {
        let state = logged_in_state();
        let old_generation = state.session.generation() - 1;

        let (state, cmds) = update(
            Msg::Blog(BlogMsg::Fetched {
                generation: old_generation,
                result: Ok(vec![]),
            }),
            state,
        );

        assert!(cmds.is_empty());
        assert_eq!(state.blogs.len(), 2);
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_token_expiry_schedules_logout() {
        let state = logged_in_state();
        let generation = state.session.generation();

        let (state, cmds) = update(
            Msg::Blog(BlogMsg::Updated {
                generation,
                result: Err(AuthError::TokenExpired.into()),
            }),
            state,
        );

        assert_eq!(
            notification_of(&state),
            Some((LOGIN_EXPIRED.to_string(), NotificationStyle::Error))
        );
        assert!(cmds.iter().any(|cmd| matches!(
            cmd,
            Cmd::ScheduleLogout { generation: g, delay_ms } if *g == generation && *delay_ms == 5000
        )));
        // Still logged in until the timer fires
        assert!(state.is_logged_in());

        let (state, cmds) = update(Msg::Session(SessionMsg::Expire { generation }), state);
        assert!(!state.is_logged_in());
        assert!(cmds.iter().any(|cmd| matches!(cmd, Cmd::ClearSession)));
    }

    #[test]
    fn test_expire_from_previous_session_is_ignored() {
        let mut state = logged_in_state();
        let old_generation = state.session.generation();
        state.session.start(user("u1", "root"));

        let (state, cmds) = update(
            Msg::Session(SessionMsg::Expire {
                generation: old_generation,
            }),
            state,
        );

        assert!(cmds.is_empty());
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_login_with_empty_fields_is_rejected() {
        let state = AppState::default();

        let (state, cmds) = update(
            Msg::Session(SessionMsg::Login {
                username: "root".into(),
                password: SecretString::from(""),
            }),
            state,
        );

        assert!(!has_network(&cmds));
        assert_eq!(
            notification_of(&state),
            Some((MISSING_CREDENTIALS.to_string(), NotificationStyle::Error))
        );
    }

    #[test]
    fn test_login_success_persists_and_fetches() {
        let mut state = AppState::default();
        state.ui.mode = UiMode::Login;
        state.ui.login_form.set_value(LoginFields::USERNAME, "root");

        let (state, cmds) = update(
            Msg::Session(SessionMsg::LoggedIn {
                generation: 0,
                result: Ok(user("u1", "root")),
            }),
            state,
        );

        assert!(state.is_logged_in());
        assert_eq!(state.ui.mode, UiMode::Browse);
        assert_eq!(state.ui.login_form.value(LoginFields::USERNAME), "");
        assert!(matches!(cmds[0], Cmd::PersistSession { .. }));
        assert!(matches!(cmds[1], Cmd::SetAuthToken { token: Some(_) }));
        assert!(matches!(cmds[2], Cmd::FetchBlogs { generation: 1 }));
        assert_eq!(
            notification_of(&state),
            Some(("root logged in".to_string(), NotificationStyle::Success))
        );
    }

    #[test]
    fn test_login_failure_shows_generic_message() {
        let (state, cmds) = update(
            Msg::Session(SessionMsg::LoggedIn {
                generation: 0,
                result: Err(AuthError::InvalidCredentials.into()),
            }),
            AppState::default(),
        );

        assert!(!state.is_logged_in());
        assert!(!has_network(&cmds));
        assert_eq!(
            notification_of(&state),
            Some((WRONG_CREDENTIALS.to_string(), NotificationStyle::Error))
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let state = logged_in_state();

        let (state, cmds) = update(Msg::Session(SessionMsg::Logout), state);

        assert!(!state.is_logged_in());
        assert!(matches!(cmds[0], Cmd::ClearSession));
        assert!(matches!(cmds[1], Cmd::SetAuthToken { token: None }));
        assert_eq!(
            notification_of(&state),
            Some(("Logged out.".to_string(), NotificationStyle::Info))
        );
    }

    #[test]
    fn test_restore_attaches_token_and_fetches() {
        let (state, cmds) = update(
            Msg::Session(SessionMsg::Restored(Some(user("u1", "root")))),
            AppState::default(),
        );

        assert!(state.is_logged_in());
        assert!(matches!(cmds[0], Cmd::SetAuthToken { token: Some(_) }));
        assert!(matches!(cmds[1], Cmd::FetchBlogs { generation: 1 }));
    }

    #[test]
    fn test_filter_typing_updates_query() {
        struct AppendEngine;
        impl TextAreaEngine for AppendEngine {
            fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
                let mut content = snapshot.content.clone();
                for key in keys {
                    if let KeyCode::Char(c) = key.code {
                        content.push(c);
                    }
                }
                TextAreaState::new(content)
            }
        }
        let ctx = UpdateContext {
            text_area: &AppendEngine,
        };

        let (state, _) = update_with_context(
            Msg::Ui(UiMsg::StartFilter),
            logged_in_state(),
            &ctx,
        );
        let key = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE);
        let (state, _) = update_with_context(Msg::Ui(UiMsg::ProcessInput(key)), state, &ctx);

        assert_eq!(state.blogs.query(), "m");
        assert_eq!(state.visible_blogs().len(), 1);

        let (state, _) = update_with_context(Msg::Ui(UiMsg::Cancel), state, &ctx);
        assert_eq!(state.blogs.query(), "");
        assert_eq!(state.ui.mode, UiMode::Browse);
    }

    #[test]
    fn test_notification_clear_is_routed() {
        let (state, cmds) = update(
            Msg::notify(Notification::info("hi")),
            AppState::default(),
        );
        assert_eq!(cmds.len(), 1);
        let id = state.notification.current_id();

        let (state, _) = update(
            Msg::Notification(NotificationMsg::Clear { id }),
            state,
        );
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_system_quit() {
        let (state, _) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
    }
}
