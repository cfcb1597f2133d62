//! Infrastructure Layer
//!
//! Store implementations.

pub mod memory;
pub mod seed;

pub use memory::InMemoryUserRepository;
