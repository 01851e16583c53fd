pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{FavoriteTvShow, UnknownTvShow, User, UserRepository};
