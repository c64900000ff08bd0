//! User model and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User role.
///
/// Roles are tiered for assignment purposes: superadmin > admin > client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
    Superadmin,
}

impl Role {
    /// Check whether the role carries administrative privileges
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }

    /// Check whether a holder of this role may hand out `target` to a user.
    ///
    /// Anyone may register a plain client; staff roles are granted by a
    /// superadmin only.
    pub fn can_assign(self, target: Role) -> bool {
        match target {
            Role::Client => true,
            Role::Admin | Role::Superadmin => self == Role::Superadmin,
        }
    }
}

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_roles() {
        assert!(!Role::Client.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(Role::Superadmin.is_staff());
    }

    #[test]
    fn test_role_assignment_tiering() {
        // Anyone may create a client
        assert!(Role::Client.can_assign(Role::Client));
        assert!(Role::Admin.can_assign(Role::Client));
        assert!(Role::Superadmin.can_assign(Role::Client));

        // Staff roles require a superadmin
        assert!(!Role::Client.can_assign(Role::Admin));
        assert!(!Role::Admin.can_assign(Role::Admin));
        assert!(!Role::Admin.can_assign(Role::Superadmin));
        assert!(Role::Superadmin.can_assign(Role::Admin));
        assert!(Role::Superadmin.can_assign(Role::Superadmin));
    }
}
