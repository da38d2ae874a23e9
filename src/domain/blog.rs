use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{error::ClientError, user::User};

/// The user a blog belongs to, as embedded by the server in each blog record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlogOwner {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// A blog record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(
        default,
        deserialize_with = "owner_or_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<BlogOwner>,
}

/// Update responses reference the owner by id only
#[derive(Deserialize)]
#[serde(untagged)]
enum OwnerRepr {
    Full(BlogOwner),
    Id(String),
}

fn owner_or_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BlogOwner>, D::Error> {
    Ok(
        Option::<OwnerRepr>::deserialize(deserializer)?.map(|repr| match repr {
            OwnerRepr::Full(owner) => owner,
            OwnerRepr::Id(id) => BlogOwner {
                id,
                ..Default::default()
            },
        }),
    )
}

impl Blog {
    /// Id of the owning user, if the server told us who owns it
    pub fn owner_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|owner| owner.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Whether `user` may delete this blog.
    ///
    /// Owners are matched by id. Older servers return logins without an id,
    /// in which case the username is compared instead.
    pub fn is_owned_by(&self, user: &User) -> bool {
        let Some(owner) = &self.user else {
            return false;
        };

        match (self.owner_id(), user.id.is_empty()) {
            (Some(owner_id), false) => owner_id == user.id,
            _ => owner.username == user.username,
        }
    }

    /// Keeps `known` when the server only sent back the owner's id
    pub fn with_known_owner(mut self, known: Option<&BlogOwner>) -> Self {
        if let (Some(owner), Some(known)) = (&self.user, known) {
            if owner.username.is_empty() && owner.id == known.id {
                self.user = Some(known.clone());
            }
        }
        self
    }

    /// Copy of this blog with one more like, as sent to the server
    pub fn liked(&self) -> Self {
        Self {
            likes: self.likes.saturating_add(1),
            ..self.clone()
        }
    }
}

/// Payload for creating a blog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl NewBlog {
    pub const MISSING_FIELDS: &'static str = "Title, author or url missing";

    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }

    /// Rejects drafts with an empty field before anything is sent
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.is_empty() || self.author.is_empty() || self.url.is_empty() {
            return Err(ClientError::Validation(Self::MISSING_FIELDS.to_string()));
        }
        Ok(())
    }
}
