//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAccountStore {
    async fn create(&self, user: &User) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                full_name,
                email,
                password_hash,
                user_role,
                age,
                is_active,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.full_name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.id())
        .bind(user.age)
        .bind(user.is_active)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                full_name,
                email,
                password_hash,
                user_role,
                age,
                is_active,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                full_name,
                email,
                password_hash,
                user_role,
                age,
                is_active,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AccountResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                email = $3,
                password_hash = $4,
                user_role = $5,
                age = $6,
                is_active = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.full_name)
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.id())
        .bind(user.age)
        .bind(user.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AccountResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AccountResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                full_name,
                email,
                password_hash,
                user_role,
                age,
                is_active,
                created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    full_name: String,
    email: String,
    password_hash: String,
    user_role: i16,
    age: Option<i32>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("Stored hash unreadable: {e}")))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            full_name: self.full_name,
            email: Email::from_db(self.email),
            password_hash,
            role: UserRole::from_id(self.user_role),
            age: self.age,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}
