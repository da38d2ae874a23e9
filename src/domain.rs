//! Domain logic
//!
//! This module contains the blog-list domain:
//! - Blog, user and notification records
//! - The client error taxonomy
//! - Pure filter/sort views over the blog list

pub mod blog;
pub mod error;
pub mod notification;
pub mod user;
pub mod view;

pub use blog::{Blog, BlogOwner, NewBlog};
pub use error::{AuthError, ClientError};
pub use notification::{Notification, NotificationStyle};
pub use user::User;
