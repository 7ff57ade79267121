use anyhow::Result;
use sql_connection::SqlConnect;

use crate::TestPostgresContainer;

/// Create a SQL connection from a test container for use with DAOs and
/// handlers
pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    SqlConnect::new(container.pool.clone())
}

/// Insert a user row and return its generated id
pub async fn create_test_user(
    container: &TestPostgresContainer, email: &str, name: &str,
) -> Result<i64> {
    let client = container.pool.get().await?;
    let row = client
        .query_one(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING id",
            &[&email, &name],
        )
        .await?;
    Ok(row.get(0))
}

/// Read back a user's stored name, if the row exists
pub async fn fetch_user_name(
    container: &TestPostgresContainer, email: &str,
) -> Result<Option<String>> {
    let client = container.pool.get().await?;
    let row = client
        .query_opt("SELECT name FROM users WHERE email = $1", &[&email])
        .await?;
    Ok(row.map(|row| row.get(0)))
}
