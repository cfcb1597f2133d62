//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, GetUserUseCase, ListUsersInput, ListUsersUseCase,
    UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{
    CreateUserRequest, CreateUserResponse, ListUsersQuery, UpdateUserRequest, UserResponse,
};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::validation::parse_limit;

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

/// GET /users?limit=N
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> UserResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Query(pairs) = query?;
    let query = ListUsersQuery::from_pairs(pairs);
    let limit = parse_limit(query.limit.as_deref()).map_err(|e| UserError::Validation(vec![e]))?;

    let use_case = ListUsersUseCase::new(state.repo.clone(), state.config.clone());
    let users = use_case.execute(ListUsersInput { limit }).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{username}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(username) = path?;
    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&username).await?;

    Ok(Json(user.into()))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> UserResult<(StatusCode, Json<CreateUserResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone());

    let input = CreateUserInput {
        username: req.username,
        date_joined: req.date_joined,
        location: req.location,
        age: req.age,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse::created(&output.username)),
    ))
}

/// PATCH /users/{username}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(username) = path?;
    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let input = UpdateUserInput {
        username,
        patch: req.into(),
    };

    let user = use_case.execute(input).await?;

    Ok(Json(user.into()))
}
