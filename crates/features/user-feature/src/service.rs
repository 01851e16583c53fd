use domain::{DomainError, FavoriteTvShow, User, UserRepository};
use sqlx::PgConnection;
use tracing::{error, info, instrument};

use crate::error::UserFeatureError;

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

/// Input for replacing a user; `id` selects the row and is never reassigned
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub id: i32,
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

impl CreateUserInput {
    /// Check the input without touching the store
    pub fn validate(&self) -> Result<(), UserFeatureError> {
        validate_name(&self.name)
    }
}

impl UpdateUserInput {
    /// Check the input without touching the store
    pub fn validate(&self) -> Result<(), UserFeatureError> {
        validate_name(&self.name)
    }
}

/// Service for user-related operations.
///
/// Every operation runs on a single connection borrowed for the lifetime of
/// one request.
pub struct UserService;

impl UserService {
    /// Create a user; the store assigns the id
    #[instrument(skip(conn, input), fields(favorite_tv_show = %input.favorite_tv_show))]
    pub async fn create(
        conn: &mut PgConnection,
        input: CreateUserInput,
    ) -> Result<User, UserFeatureError> {
        input.validate()?;

        let user = UserRepository::create(&mut *conn, &input.name, input.favorite_tv_show)
            .await
            .map_err(|e| {
                error!(error = %e, "failed to insert user");
                UserFeatureError::CreateFailed(e)
            })?;

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(conn: &mut PgConnection, id: i32) -> Result<User, UserFeatureError> {
        UserRepository::find_by_id(&mut *conn, id)
            .await?
            .ok_or(UserFeatureError::NotFound(id))
    }

    /// List all users
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<User>, UserFeatureError> {
        Ok(UserRepository::list(&mut *conn).await?)
    }

    /// Replace every field of an existing user
    #[instrument(skip(conn, input), fields(user_id = input.id))]
    pub async fn update(
        conn: &mut PgConnection,
        input: UpdateUserInput,
    ) -> Result<User, UserFeatureError> {
        input.validate()?;

        let user = UserRepository::update(&mut *conn, input.id, &input.name, input.favorite_tv_show)
            .await?
            .ok_or(UserFeatureError::NotFound(input.id))?;

        info!("user updated");
        Ok(user)
    }

    /// Permanently delete a user
    #[instrument(skip(conn))]
    pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<(), UserFeatureError> {
        if !UserRepository::delete(&mut *conn, id).await? {
            return Err(UserFeatureError::NotFound(id));
        }

        info!("user deleted");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), UserFeatureError> {
    User::validate_name(name).map_err(|e| match e {
        DomainError::Validation(msg) => UserFeatureError::InvalidInput(msg),
        other => UserFeatureError::Domain(other),
    })
}
