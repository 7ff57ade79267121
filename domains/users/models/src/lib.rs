use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as the store returns it. The email is the external
/// identifier; the numeric id never appears in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
