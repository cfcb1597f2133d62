//! Seed Data
//!
//! Records present in the directory on every process start.

use crate::domain::entity::user::User;

/// The three seed users, in insertion order
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("jack", "2021-12-01", "New Jersey", 28),
        User::new("jill", "2021-12-02", "Los Angeles", 19),
        User::new("jane", "2021-12-03", "Toronto", 52),
    ]
}
