use crate::domain::User;

/// The logged-in user and the session generation.
///
/// The generation increases every time the session changes. Network
/// commands are tagged with the generation they were issued in, and
/// responses from an older generation are dropped.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<User>,
    generation: u64,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Starts a session for `user` and returns its generation
    pub fn start(&mut self, user: User) -> u64 {
        self.user = Some(user);
        self.bump()
    }

    /// Ends the session and returns the new generation
    pub fn end(&mut self) -> u64 {
        self.user = None;
        self.bump()
    }

    fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "mluukkai".into(),
            name: "Matti Luukkainen".into(),
            token: SecretString::from("token"),
        }
    }

    #[test]
    fn test_start_and_end_bump_generation() {
        let mut session = SessionState::default();
        assert!(!session.is_logged_in());
        assert!(session.is_current(0));

        let started = session.start(user());
        assert_eq!(started, 1);
        assert!(session.is_logged_in());
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("mluukkai"));
        assert!(!session.is_current(0));

        let ended = session.end();
        assert_eq!(ended, 2);
        assert!(session.user().is_none());
        assert!(session.is_current(2));
    }
}
