use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::group::errors::GroupNameError;
use crate::domain::user::models::UserId;

/// Group unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Generate a new random group ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Group aggregate, authored by the user who created it.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    pub name: GroupName,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group name value object with validation.
///
/// Ensures name is non-empty and within 100 byte limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupName(String);

impl GroupName {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated group name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty string
    /// * `TooLong` - Name exceeds 100 bytes
    pub fn new(name: String) -> Result<Self, GroupNameError> {
        let length = name.len();
        if length == 0 {
            Err(GroupNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(GroupNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a group.
#[derive(Debug)]
pub struct CreateGroupCommand {
    pub name: GroupName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_valid() {
        let name = GroupName::new("climbers".to_string()).unwrap();
        assert_eq!(name.as_str(), "climbers");
    }

    #[test]
    fn test_group_name_empty() {
        assert_eq!(GroupName::new(String::new()), Err(GroupNameError::Empty));
    }

    #[test]
    fn test_group_name_too_long() {
        assert_eq!(
            GroupName::new("x".repeat(101)),
            Err(GroupNameError::TooLong {
                max: 100,
                actual: 101
            })
        );
        assert!(GroupName::new("x".repeat(100)).is_ok());
    }
}
