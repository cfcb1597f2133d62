//! Application Configuration
//!
//! Configuration for the user directory application layer.

/// Page size used when `limit` is omitted
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// User directory application configuration
#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Number of users returned by list when no limit is given
    pub default_list_limit: usize,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
