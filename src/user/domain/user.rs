//! User value type.

use super::{UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// A user known to the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Creates a user value.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks that the user carries a name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidName`] when the name is empty.
    pub fn validate(&self) -> Result<(), UserDomainError> {
        if self.name.is_empty() {
            return Err(UserDomainError::InvalidName);
        }
        Ok(())
    }
}
