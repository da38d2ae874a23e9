//! Durable key-value storage
//!
//! Each key is stored as `<key>.json` inside one directory, which by default
//! is the application data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::User;

/// Key the logged-in user is stored under
pub const SESSION_KEY: &str = "loggedBlogAppUser";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_of(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).wrap_err_with(|| format!("reading {key}")),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .wrap_err_with(|| format!("creating {}", self.dir.display()))?;
        std::fs::write(self.path_of(key), value).wrap_err_with(|| format!("writing {key}"))
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_of(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).wrap_err_with(|| format!("removing {key}")),
        }
    }
}

/// Persists the logged-in user between runs
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: LocalStorage,
}

impl SessionStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Store in the application data directory
    pub fn in_data_dir() -> Self {
        Self::new(LocalStorage::new(crate::utils::get_data_dir()))
    }

    /// The stored user. A value that cannot be parsed is logged and
    /// treated as absent.
    pub fn load(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get_item(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::warn!("ignoring unreadable stored session: {e}");
                Ok(None)
            }
        }
    }

    pub fn save(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_KEY, &raw)
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::{ExposeSecret, SecretString};

    fn user() -> User {
        User {
            id: "5a437a9e514ab7f168ddf138".into(),
            username: "mluukkai".into(),
            name: "Matti Luukkainen".into(),
            token: SecretString::from("eyJhbGciOiJIUzI1NiJ9"),
        }
    }

    #[test]
    fn test_items_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = LocalStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get_item("k")?, None);
        storage.set_item("k", "v")?;
        assert_eq!(storage.get_item("k")?, Some("v".to_string()));
        storage.remove_item("k")?;
        assert_eq!(storage.get_item("k")?, None);
        // Removing twice is fine
        storage.remove_item("k")?;
        Ok(())
    }

    #[test]
    fn test_session_save_load_clear() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(LocalStorage::new(dir.path()));

        store.save(&user())?;
        assert!(dir.path().join("loggedBlogAppUser.json").exists());

        let loaded = store.load()?;
        assert_eq!(loaded, Some(user()));
        assert_eq!(
            loaded.map(|u| u.token.expose_secret().to_string()),
            Some("eyJhbGciOiJIUzI1NiJ9".to_string())
        );

        store.clear()?;
        assert_eq!(store.load()?, None);
        Ok(())
    }

    #[test]
    fn test_corrupt_session_is_absent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = LocalStorage::new(dir.path());
        storage.set_item(SESSION_KEY, "{not json")?;

        let store = SessionStore::new(storage);

        assert_eq!(store.load()?, None);
        Ok(())
    }
}
