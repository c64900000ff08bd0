//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult, FieldErrors},
    middleware::auth::AuthenticatedUser,
    models::{Role, User},
    services::AuthService,
    utils::validation::{validate_national_id, validate_phone},
};

/// User service for registration and account management
pub struct UserService;

impl UserService {
    /// Register a new user.
    ///
    /// Registration is open; staff roles can only be granted by an
    /// authenticated superadmin. The role defaults to client.
    pub async fn register(
        pool: &PgPool,
        requester: Option<&AuthenticatedUser>,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
        national_id: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        let role = role.unwrap_or(Role::Client);
        let granter = requester.map(|u| u.role).unwrap_or(Role::Client);
        if !granter.can_assign(role) {
            return Err(AppError::Forbidden(
                "Only a superadministrator can create a user with an administrative role."
                    .to_string(),
            ));
        }

        Self::check_contact_fields(pool, email, phone, national_id, None).await?;

        let password_hash = AuthService::hash_password(password)?;

        UserRepository::create(pool, name, email, phone, national_id, &password_hash, role).await
    }

    /// List all users (staff only)
    pub async fn list(pool: &PgPool, requester: &AuthenticatedUser) -> AppResult<Vec<User>> {
        if !requester.is_staff() {
            return Err(AppError::Forbidden(
                "Only administrators can view all users.".to_string(),
            ));
        }

        UserRepository::list(pool).await
    }

    /// Show a user (staff or the user themselves)
    pub async fn get(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        user_id: &Uuid,
    ) -> AppResult<User> {
        let user = Self::find_or_not_found(pool, user_id).await?;

        if !requester.is_staff() && requester.id != user.id {
            return Err(AppError::Forbidden(
                "Only an administrator or the user themselves can view a user's data.".to_string(),
            ));
        }

        Ok(user)
    }

    /// Update a user's account.
    ///
    /// Tiered: clients edit themselves; admins edit clients and themselves;
    /// an admin other than yourself takes a superadmin; a superadmin is
    /// only editable by themselves. Role changes are superadmin-only.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        user_id: &Uuid,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        phone: Option<&str>,
        national_id: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        let target = Self::find_or_not_found(pool, user_id).await?;

        if !Self::can_update(requester, &target) {
            return Err(AppError::Forbidden(
                "You are not allowed to edit this user's data.".to_string(),
            ));
        }

        if role.is_some() && requester.role != Role::Superadmin {
            return Err(AppError::Forbidden(
                "Only a superadministrator can change a user's role.".to_string(),
            ));
        }

        if let Some(email) = email {
            Self::check_contact_fields(pool, email, phone, national_id, Some(&target.id)).await?;
        } else {
            Self::check_optional_contact_fields(pool, phone, national_id, Some(&target.id)).await?;
        }

        let password_hash = match password {
            Some(password) => Some(AuthService::hash_password(password)?),
            None => None,
        };

        UserRepository::update(
            pool,
            &target.id,
            name,
            email,
            phone,
            national_id,
            password_hash.as_deref(),
            role,
        )
        .await
    }

    /// Delete a user.
    ///
    /// Clients can be removed by staff or themselves; removing a staff
    /// account takes a superadmin or the account holder.
    pub async fn delete(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        user_id: &Uuid,
    ) -> AppResult<()> {
        let target = Self::find_or_not_found(pool, user_id).await?;

        if !Self::can_delete(requester, &target) {
            return Err(AppError::Forbidden(
                "You are not allowed to delete this user.".to_string(),
            ));
        }

        UserRepository::delete(pool, &target.id).await?;

        Ok(())
    }

    // =========================================================================
    // Policy predicates
    // =========================================================================

    fn can_update(requester: &AuthenticatedUser, target: &User) -> bool {
        if requester.id == target.id {
            return true;
        }
        match target.role {
            Role::Client => requester.is_staff(),
            Role::Admin => requester.role == Role::Superadmin,
            Role::Superadmin => false,
        }
    }

    fn can_delete(requester: &AuthenticatedUser, target: &User) -> bool {
        if requester.id == target.id {
            return true;
        }
        match target.role {
            Role::Client => requester.is_staff(),
            Role::Admin | Role::Superadmin => requester.role == Role::Superadmin,
        }
    }

    // =========================================================================
    // Field checks
    // =========================================================================

    /// Format and uniqueness checks for email, phone and national id
    async fn check_contact_fields(
        pool: &PgPool,
        email: &str,
        phone: Option<&str>,
        national_id: Option<&str>,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        if UserRepository::email_in_use(pool, email, exclude).await? {
            errors.add("email", "A user with that email already exists.");
        }

        Self::collect_optional_contact_errors(pool, phone, national_id, exclude, &mut errors)
            .await?;

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }

    async fn check_optional_contact_fields(
        pool: &PgPool,
        phone: Option<&str>,
        national_id: Option<&str>,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        Self::collect_optional_contact_errors(pool, phone, national_id, exclude, &mut errors)
            .await?;

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }

    async fn collect_optional_contact_errors(
        pool: &PgPool,
        phone: Option<&str>,
        national_id: Option<&str>,
        exclude: Option<&Uuid>,
        errors: &mut FieldErrors,
    ) -> AppResult<()> {
        if let Some(phone) = phone {
            if let Err(message) = validate_phone(phone) {
                errors.add("phone", message);
            } else if UserRepository::phone_in_use(pool, phone, exclude).await? {
                errors.add("phone", "A user with that phone number already exists.");
            }
        }

        if let Some(national_id) = national_id {
            if let Err(message) = validate_national_id(national_id) {
                errors.add("national_id", message);
            } else if UserRepository::national_id_in_use(pool, national_id, exclude).await? {
                errors.add("national_id", "A user with that national id already exists.");
            }
        }

        Ok(())
    }

    async fn find_or_not_found(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn auth(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "requester".to_string(),
            role,
        }
    }

    fn target(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "target".to_string(),
            email: "target@example.com".to_string(),
            phone: None,
            national_id: None,
            password_hash: "hash".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn as_self(requester: &AuthenticatedUser, role: Role) -> User {
        User {
            id: requester.id,
            ..target(role)
        }
    }

    #[test]
    fn test_everyone_edits_themselves() {
        for role in [Role::Client, Role::Admin, Role::Superadmin] {
            let requester = auth(role);
            let own_account = as_self(&requester, role);
            assert!(UserService::can_update(&requester, &own_account));
            assert!(UserService::can_delete(&requester, &own_account));
        }
    }

    #[test]
    fn test_staff_manage_clients() {
        let client = target(Role::Client);
        assert!(!UserService::can_update(&auth(Role::Client), &client));
        assert!(UserService::can_update(&auth(Role::Admin), &client));
        assert!(UserService::can_update(&auth(Role::Superadmin), &client));
        assert!(UserService::can_delete(&auth(Role::Admin), &client));
    }

    #[test]
    fn test_admins_take_a_superadmin() {
        let admin_account = target(Role::Admin);
        assert!(!UserService::can_update(&auth(Role::Admin), &admin_account));
        assert!(UserService::can_update(&auth(Role::Superadmin), &admin_account));
        assert!(!UserService::can_delete(&auth(Role::Admin), &admin_account));
        assert!(UserService::can_delete(&auth(Role::Superadmin), &admin_account));
    }

    #[test]
    fn test_superadmin_accounts_are_self_edit_only() {
        let superadmin_account = target(Role::Superadmin);
        assert!(!UserService::can_update(&auth(Role::Superadmin), &superadmin_account));
        // Deletion still allows a fellow superadmin
        assert!(UserService::can_delete(&auth(Role::Superadmin), &superadmin_account));
        assert!(!UserService::can_delete(&auth(Role::Admin), &superadmin_account));
    }
}
