use axum::{Router, extract::State, response::Json, routing::put};
use common_errors::AppError;
use database_traits::dao::UserStore;
use sql_connection::SqlConnect;
use tracing::instrument;
use user_command_handlers::UpdateUserNameHandler;
use user_commands::UpdateUserNameCommand;
use user_dao::UserDao;
use user_errors::UserError;
use user_models::User;
use user_responses::UserResponse;

#[derive(Clone)]
pub struct UserServices<S = UserDao> {
    pub update_user_name: UpdateUserNameHandler<S>,
}

impl UserServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            update_user_name: UpdateUserNameHandler::new(db),
        }
    }
}

impl<S> UserServices<S>
where
    S: UserStore<Record = User, Error = UserError>,
{
    pub fn with_store(store: S) -> Self {
        Self {
            update_user_name: UpdateUserNameHandler::with_store(store),
        }
    }
}

pub struct UserHandlers;

impl UserHandlers {
    pub fn routes<S>() -> Router<UserServices<S>>
    where
        S: UserStore<Record = User, Error = UserError>
            + Clone
            + Send
            + Sync
            + 'static,
    {
        Router::new().route("/modify", put(update_user_name::<S>))
    }
}

#[utoipa::path(
    put,
    path = "/modify",
    request_body = UpdateUserNameCommand,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
#[instrument(skip_all)]
pub async fn update_user_name<S>(
    State(services): State<UserServices<S>>,
    Json(command): Json<UpdateUserNameCommand>,
) -> Result<Json<UserResponse>, AppError>
where
    S: UserStore<Record = User, Error = UserError>
        + Clone
        + Send
        + Sync
        + 'static,
{
    let result = services.update_user_name.execute(command).await?;

    tracing::info!("User name updated: {}", result.email);

    Ok(Json(result))
}
