use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use user_feature::{CreateUserInput, UpdateUserInput, UserFeatureError, UserService};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::error::ApiError;
use crate::extract::{JsonBody, UserId};
use crate::AppState;

/// `POST /users`: create a user, the id is assigned by the store
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let input = CreateUserInput::from(request);
    input.validate()?;

    // Any store failure while creating, including reaching the store, is a create failure
    let mut conn = state
        .connection()
        .await
        .map_err(UserFeatureError::CreateFailed)?;
    let user = UserService::create(&mut conn, input).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.connection().await?;
    UserService::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /users/`: replace the user whose id is given in the body
pub async fn update_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    let input = UpdateUserInput::from(request);
    input.validate()?;

    let mut conn = state.connection().await?;
    let user = UserService::update(&mut conn, input).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(format!(
            "The user with ID {} was successfully updated.",
            user.id
        )),
    ))
}

/// `GET /users`
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let mut conn = state.connection().await?;
    let users = UserService::list(&mut conn).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, ApiError> {
    let mut conn = state.connection().await?;
    let user = UserService::get(&mut conn, id).await?;
    Ok(Json(user.into()))
}
