//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Role, User},
};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        phone: Option<&str>,
        national_id: Option<&str>,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, national_id, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(national_id)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email (for login)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Check whether a user exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Check whether an email is already registered, optionally ignoring one user
    pub async fn email_in_use(
        pool: &PgPool,
        email: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(in_use)
    }

    /// Check whether a phone number is already registered, optionally ignoring one user
    pub async fn phone_in_use(
        pool: &PgPool,
        phone: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE phone = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(phone)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(in_use)
    }

    /// Check whether a national id is already registered, optionally ignoring one user
    pub async fn national_id_in_use(
        pool: &PgPool,
        national_id: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE national_id = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(national_id)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(in_use)
    }

    /// List all users
    pub async fn list(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY created_at"#)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Update user fields; absent values are left unchanged
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        national_id: Option<&str>,
        password_hash: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                national_id = COALESCE($5, national_id),
                password_hash = COALESCE($6, password_hash),
                role = COALESCE($7, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(national_id)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Delete a user; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
