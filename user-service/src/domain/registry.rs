//! In-memory user registry.

use super::User;

/// Read-only store of user records, populated exactly once at startup.
///
/// Lookup is a linear scan by id equality, which is fine at the scale the
/// registry is generated at. No mutation API exists, so the registry can be
/// shared between request workers without locking.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Build a registry over an already generated record set.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// All records in generation order (stable across calls).
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Look up one record by id, returning `None` when it does not exist.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
