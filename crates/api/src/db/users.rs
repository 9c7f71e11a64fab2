//! User repository for database operations.
//!
//! Passwords are stored as Argon2id PHC strings in the `password` column,
//! which no query here ever reads back.

use sqlx::SqlitePool;

use retail_hub_core::{UserId, Username};

use super::{RepositoryError, map_write_error};
use crate::models::{NewUser, User};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: UserId,
    username: Username,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            role: row.role,
        }
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users, without password hashes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, role
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, user: &NewUser) -> Result<UserId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            ",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.role)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(UserId::new(result.last_insert_rowid()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::test_db;

    fn manager() -> NewUser {
        NewUser {
            username: Username::parse("manager").unwrap(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role: "manager".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = test_db().await;
        let repo = UserRepository::new(&db.pool);

        let id = repo.create(&manager()).await.unwrap();
        let users = repo.list().await.unwrap();

        assert_eq!(
            users,
            vec![User {
                id,
                username: Username::parse("manager").unwrap(),
                role: "manager".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let db = test_db().await;
        let repo = UserRepository::new(&db.pool);

        repo.create(&manager()).await.unwrap();
        let err = repo
            .create(&NewUser {
                role: "server".to_string(),
                ..manager()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(ref msg) if msg.contains("users.username")));
        assert_eq!(repo.list().await.unwrap()[0].role, "manager");
    }
}
