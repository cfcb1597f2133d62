//! Presentation Layer
//!
//! HTTP handlers, DTOs, boundary validation, and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod validation;

pub use extract::ValidatedJson;
pub use handlers::UsersAppState;
pub use router::{users_router, users_router_generic};
