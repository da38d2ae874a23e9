use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::{AuthError, Blog, BlogOwner, ClientError, NewBlog, User};
use crate::infrastructure::api::BlogApi;

/// A request received by [`InMemoryBlogApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(NewBlog),
    Update(Blog),
    Delete(String),
    Login(String),
}

#[derive(Default)]
struct Inner {
    blogs: Vec<Blog>,
    accounts: HashMap<String, (String, User)>,
    token: Option<SecretString>,
    calls: Vec<ApiCall>,
    next_id: u64,
    fail_next: Option<ClientError>,
    tokens_expired: bool,
}

/// Blog service kept in memory.
///
/// Behaves like the REST service for the operations the client uses:
/// creating and deleting require a token issued by `login`, deleting
/// someone else's blog is refused and deleting a missing blog is a stale
/// record. Every request is recorded and can be inspected with `calls`.
#[derive(Default)]
pub struct InMemoryBlogApi {
    inner: Mutex<Inner>,
}

impl InMemoryBlogApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blogs(self, blogs: impl IntoIterator<Item = Blog>) -> Self {
        self.lock().blogs.extend(blogs);
        self
    }

    /// Registers an account; logging in as `user.username` with `password`
    /// returns `user`
    pub fn with_user(self, user: User, password: &str) -> Self {
        self.lock()
            .accounts
            .insert(user.username.clone(), (password.to_string(), user));
        self
    }

    pub fn blogs(&self) -> Vec<Blog> {
        self.lock().blogs.clone()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// The token currently attached, as plain text
    pub fn current_token(&self) -> Option<String> {
        self.lock()
            .token
            .as_ref()
            .map(|token| token.expose_secret().to_string())
    }

    /// Makes the next request fail with `err`
    pub fn fail_next(&self, err: ClientError) {
        self.lock().fail_next = Some(err);
    }

    /// Makes every authenticated request fail with an expired token
    pub fn expire_tokens(&self) {
        self.lock().tokens_expired = true;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, call: ApiCall) -> Result<MutexGuard<'_, Inner>, ClientError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        match inner.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(inner),
        }
    }
}

impl Inner {
    /// The account owning the attached token
    fn authenticated(&self) -> Result<User, ClientError> {
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| ClientError::from_response(401, "token missing or invalid"))?;
        if self.tokens_expired {
            return Err(ClientError::from_response(401, "token expired"));
        }
        self.accounts
            .values()
            .map(|(_, user)| user)
            .find(|user| user.token.expose_secret() == token.expose_secret())
            .cloned()
            .ok_or_else(|| ClientError::from_response(401, "token missing or invalid"))
    }
}

#[async_trait]
impl BlogApi for InMemoryBlogApi {
    fn set_token(&self, token: Option<SecretString>) {
        self.lock().token = token;
    }

    fn has_token(&self) -> bool {
        self.lock().token.is_some()
    }

    async fn login(&self, username: &str, password: &SecretString) -> Result<User, ClientError> {
        let inner = self.begin(ApiCall::Login(username.to_string()))?;
        match inner.accounts.get(username) {
            Some((expected, user)) if expected.as_str() == password.expose_secret() => {
                Ok(user.clone())
            }
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }

    async fn list(&self) -> Result<Vec<Blog>, ClientError> {
        let inner = self.begin(ApiCall::List)?;
        Ok(inner.blogs.clone())
    }

    async fn create(&self, blog: &NewBlog) -> Result<Blog, ClientError> {
        let mut inner = self.begin(ApiCall::Create(blog.clone()))?;
        let owner = inner.authenticated()?;
        if blog.title.is_empty() || blog.url.is_empty() {
            return Err(ClientError::from_response(
                400,
                "Blog validation failed: title or url missing",
            ));
        }

        inner.next_id += 1;
        let created = Blog {
            id: format!("blog-{}", inner.next_id),
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: 0,
            user: Some(BlogOwner {
                id: owner.id,
                username: owner.username,
                name: owner.name,
            }),
        };
        inner.blogs.push(created.clone());
        Ok(created)
    }

    async fn update(&self, blog: &Blog) -> Result<Blog, ClientError> {
        let mut inner = self.begin(ApiCall::Update(blog.clone()))?;
        inner.authenticated()?;
        let slot = inner
            .blogs
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or_else(|| ClientError::from_response(404, "blog not found"))?;
        slot.likes = blog.likes;
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let mut inner = self.begin(ApiCall::Delete(id.to_string()))?;
        let user = inner.authenticated()?;
        let index = inner
            .blogs
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ClientError::from_response(404, "blog already deleted"))?;
        if !inner.blogs[index].is_owned_by(&user) {
            return Err(ClientError::from_response(
                403,
                "only the creator can delete a blog",
            ));
        }
        inner.blogs.remove(index);
        Ok(())
    }
}
