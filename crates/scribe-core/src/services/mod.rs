//! Resource services - the business rules between controllers and ports.

mod auth;
mod posts;
mod users;

pub use auth::{AuthService, INVALID_CREDENTIALS};
pub use posts::PostService;
pub use users::{DeletedUser, UserService};
