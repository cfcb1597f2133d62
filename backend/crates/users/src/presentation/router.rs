//! Users Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::memory::InMemoryUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router over the in-memory store
pub fn users_router(repo: InMemoryUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/{username}",
            get(handlers::get_user::<R>).patch(handlers::update_user::<R>),
        )
        .with_state(state)
}
