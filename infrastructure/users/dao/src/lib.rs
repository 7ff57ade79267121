use async_trait::async_trait;
use dao_utils::query_helpers::first_row_or_not_found;
use database_traits::dao::UserStore;
use sql_connection::SqlConnect;
use tokio_postgres::Row;
use tracing::instrument;
use user_errors::UserError;
use user_models::User;

/// Postgres-backed [`UserStore`].
///
/// Every operation prepares one statement, runs it once, and maps the
/// returned rows. Connection pooling lives in [`SqlConnect`].
#[derive(Clone)]
pub struct UserDao {
    db: SqlConnect,
}

impl UserDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    pub fn db(&self) -> &SqlConnect { &self.db }

    fn map_row(&self, row: &Row) -> User {
        User {
            id: row.get(0),
            email: row.get(1),
            name: row.get(2),
            created_at: row.get(3),
        }
    }
}

#[async_trait]
impl UserStore for UserDao {
    type Error = UserError;
    type Record = User;

    /// Single parameterized `UPDATE`, keyed by email. The `RETURNING`
    /// clause hands back the updated row; an empty result set means no
    /// row matched the email.
    #[instrument(skip(self))]
    async fn update_name(
        &self, email: &str, name: &str,
    ) -> Result<User, UserError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "UPDATE users SET name = $2 WHERE email = $1 \
                 RETURNING id, email, name, created_at",
            )
            .await?;
        let rows = client.query(&stmt, &[&email, &name]).await?;

        first_row_or_not_found(
            &rows,
            |row| self.map_row(row),
            UserError::NotFound {
                email: email.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use database_traits::dao::UserStore;
    use test_utils::{
        TestPostgresContainer, create_sql_connect, create_test_user,
        fetch_user_name,
    };
    use user_errors::UserError;

    use crate::UserDao;

    async fn setup_test_db() -> TestPostgresContainer {
        TestPostgresContainer::new()
            .await
            .expect("failed to start postgres container")
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_update_name_returns_updated_row() {
        let container = setup_test_db().await;
        let dao = UserDao::new(create_sql_connect(&container));

        let id = create_test_user(&container, "alice@example.com", "Alys")
            .await
            .unwrap();

        let user = dao
            .update_name("alice@example.com", "Alice")
            .await
            .unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name, "Alice");

        let stored = fetch_user_name(&container, "alice@example.com")
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_update_name_unknown_email_is_not_found() {
        let container = setup_test_db().await;
        let dao = UserDao::new(create_sql_connect(&container));

        let result = dao.update_name("ghost@example.com", "Ghost").await;

        match result {
            Err(UserError::NotFound { email }) => {
                assert_eq!(email, "ghost@example.com");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_update_name_leaves_other_rows_untouched() {
        let container = setup_test_db().await;
        let dao = UserDao::new(create_sql_connect(&container));

        create_test_user(&container, "alice@example.com", "Alice")
            .await
            .unwrap();
        create_test_user(&container, "bob@example.com", "Bob")
            .await
            .unwrap();

        dao.update_name("alice@example.com", "Alicia")
            .await
            .unwrap();

        let bob = fetch_user_name(&container, "bob@example.com")
            .await
            .unwrap();
        assert_eq!(bob.as_deref(), Some("Bob"));
    }
}
