mod auth;

pub use auth::{ApiAuth, OwnerId};
