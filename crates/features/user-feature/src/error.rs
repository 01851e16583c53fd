use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserFeatureError {
    #[error("Domain error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("User with ID {0} is not available.")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A problem occurred when adding the user to the database.")]
    CreateFailed(#[source] domain::DomainError),
}
