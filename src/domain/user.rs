use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The logged-in user together with the bearer token issued at login.
///
/// This is both the login response body and the value persisted for
/// session restore, so the token has to survive a serde round trip even
/// though it is redacted from `Debug` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(serialize_with = "expose_token", deserialize_with = "secret_token")]
    pub token: SecretString,
}

impl User {
    /// Name shown in the header, falling back to the username
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.username == other.username
            && self.name == other.name
            && self.token.expose_secret() == other.token.expose_secret()
    }
}

impl Eq for User {}

fn expose_token<S: Serializer>(token: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.expose_secret())
}

fn secret_token<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}
