//! Blog service client
//!
//! `BlogApi` is the seam between the command executor and the REST service.
//! `HttpBlogApi` talks to the real service; `InMemoryBlogApi` keeps
//! everything in memory for tests.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::{Blog, ClientError, NewBlog, User};

pub use http::HttpBlogApi;
pub use memory::{ApiCall, InMemoryBlogApi};

#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Sets or clears the bearer token sent with authenticated requests
    fn set_token(&self, token: Option<SecretString>);

    fn has_token(&self) -> bool;

    async fn login(&self, username: &str, password: &SecretString) -> Result<User, ClientError>;

    async fn list(&self) -> Result<Vec<Blog>, ClientError>;

    async fn create(&self, blog: &NewBlog) -> Result<Blog, ClientError>;

    /// Replaces the blog with the same id
    async fn update(&self, blog: &Blog) -> Result<Blog, ClientError>;

    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}
