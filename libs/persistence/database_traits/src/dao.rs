use async_trait::async_trait;

/// Mutation-side contract of the user store.
///
/// The store is the sole authority on whether an email identifies an
/// existing user: `update_name` either returns the updated record or
/// fails, never a partial result. Implementations issue exactly one
/// mutation per call and must not retry on their own.
#[async_trait]
pub trait UserStore {
    type Record: Send + Sync + 'static;
    type Error: Send + 'static;

    async fn update_name(
        &self, email: &str, name: &str,
    ) -> Result<Self::Record, Self::Error>;
}
