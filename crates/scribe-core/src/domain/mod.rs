//! Domain entities and the input shapes services accept.

mod auth;
mod post;
mod user;

pub use auth::{AuthSession, Credentials, Registration};
pub use post::{AuthorRef, CreatePost, NewPost, Post};
pub use user::{CreateUser, NewUser, User, UserChanges};
