//! User Entity
//!
//! A directory entry. The username is both the record's identity and
//! the store key.

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique, immutable once created
    pub username: String,
    /// Date-formatted string; not format-checked
    pub date_joined: String,
    /// Free text
    pub location: String,
    pub age: i64,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        date_joined: impl Into<String>,
        location: impl Into<String>,
        age: i64,
    ) -> Self {
        Self {
            username: username.into(),
            date_joined: date_joined.into(),
            location: location.into(),
            age,
        }
    }

    /// Merge the provided fields of `patch` into this record.
    ///
    /// `username` is never touched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(date_joined) = patch.date_joined {
            self.date_joined = date_joined;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

/// Partial update: `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub date_joined: Option<String>,
    pub location: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.date_joined.is_none() && self.location.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_partial() {
        let mut user = User::new("jack", "2021-12-01", "New Jersey", 28);
        user.apply(UserPatch {
            location: Some("Boston".to_string()),
            ..Default::default()
        });

        assert_eq!(user.location, "Boston");
        assert_eq!(user.date_joined, "2021-12-01");
        assert_eq!(user.age, 28);
    }

    #[test]
    fn test_apply_empty_is_noop() {
        let mut user = User::new("jill", "2021-12-02", "Los Angeles", 19);
        let before = user.clone();
        let patch = UserPatch::default();
        assert!(patch.is_empty());

        user.apply(patch);
        assert_eq!(user, before);
    }

    #[test]
    fn test_apply_all_fields() {
        let mut user = User::new("jane", "2021-12-03", "Toronto", 52);
        user.apply(UserPatch {
            date_joined: Some("2022-01-01".to_string()),
            location: Some("Montreal".to_string()),
            age: Some(53),
        });

        assert_eq!(user, User::new("jane", "2022-01-01", "Montreal", 53));
    }
}
