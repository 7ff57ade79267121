use database_traits::dao::UserStore;
use sql_connection::SqlConnect;
use tracing::instrument;
use user_commands::UpdateUserNameCommand;
use user_dao::UserDao;
use user_errors::UserError;
use user_models::User;
use user_responses::UserResponse;

/// Renames the user identified by email.
///
/// Generic over the backing [`UserStore`] so tests can swap the
/// Postgres DAO for an in-memory fake. Production wiring uses the
/// default store.
#[derive(Clone)]
pub struct UpdateUserNameHandler<S = UserDao> {
    store: S,
}

impl UpdateUserNameHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            store: UserDao::new(db),
        }
    }
}

impl<S> UpdateUserNameHandler<S>
where
    S: UserStore<Record = User, Error = UserError>,
{
    pub fn with_store(store: S) -> Self { Self { store } }

    /// Issues exactly one store mutation per call. Store failures
    /// surface unchanged to the caller.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateUserNameCommand,
    ) -> Result<UserResponse, UserError> {
        let updated_user = self
            .store
            .update_name(&command.email, &command.name)
            .await?;

        Ok(UserResponse::from(updated_user))
    }
}
