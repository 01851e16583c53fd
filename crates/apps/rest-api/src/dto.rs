use domain::{FavoriteTvShow, User};
use serde::{Deserialize, Serialize};

/// Body of `POST /users`. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

/// Body of `PUT /users/`. `id` selects the row to replace.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: i32,
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

/// JSON representation of a User
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub favorite_tv_show: FavoriteTvShow,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            favorite_tv_show: user.favorite_tv_show,
        }
    }
}

impl From<CreateUserRequest> for user_feature::CreateUserInput {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            favorite_tv_show: req.favorite_tv_show,
        }
    }
}

impl From<UpdateUserRequest> for user_feature::UpdateUserInput {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            favorite_tv_show: req.favorite_tv_show,
        }
    }
}

/// Error payload returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
