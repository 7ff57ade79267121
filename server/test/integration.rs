use test_utils::{TestPostgresContainer, create_sql_connect};
use user_command_handlers::UpdateUserNameHandler;

pub struct IntegrationTestSetup {
    pub container: TestPostgresContainer,
    pub update_user_name_handler: UpdateUserNameHandler,
}

impl IntegrationTestSetup {
    pub async fn new() -> anyhow::Result<Self> {
        let container = TestPostgresContainer::new().await?;
        let sql_connect = create_sql_connect(&container);

        let update_user_name_handler =
            UpdateUserNameHandler::new(sql_connect);

        Ok(Self {
            container,
            update_user_name_handler,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use common_errors::AppError;
    use test_utils::{create_test_user, fetch_user_name};
    use user_commands::UpdateUserNameCommand;
    use user_errors::UserError;

    use crate::IntegrationTestSetup;

    fn rename_command(email: &str, name: &str) -> UpdateUserNameCommand {
        UpdateUserNameCommand {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_rename_user_end_to_end() {
        let setup = IntegrationTestSetup::new().await.unwrap();

        let id =
            create_test_user(&setup.container, "alice@example.com", "Alys")
                .await
                .unwrap();

        let response = setup
            .update_user_name_handler
            .execute(rename_command("alice@example.com", "Alice"))
            .await
            .unwrap();

        assert_eq!(response.id, id);
        assert_eq!(response.email, "alice@example.com");
        assert_eq!(response.name, "Alice");

        let stored = fetch_user_name(&setup.container, "alice@example.com")
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_rename_unknown_email_collapses_to_bare_404() {
        let setup = IntegrationTestSetup::new().await.unwrap();

        let error = setup
            .update_user_name_handler
            .execute(rename_command("ghost@example.com", "Ghost"))
            .await
            .unwrap_err();

        assert!(matches!(error, UserError::NotFound { .. }));

        let app_error = AppError::from(error);
        assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(app_error.message(), "User not found");
    }

    #[tokio::test]
    #[ignore = "needs a running Docker daemon"]
    async fn test_rename_twice_keeps_latest_name() {
        let setup = IntegrationTestSetup::new().await.unwrap();

        create_test_user(&setup.container, "bob@example.com", "Bob")
            .await
            .unwrap();

        setup
            .update_user_name_handler
            .execute(rename_command("bob@example.com", "Bobby"))
            .await
            .unwrap();
        let response = setup
            .update_user_name_handler
            .execute(rename_command("bob@example.com", "Robert"))
            .await
            .unwrap();

        assert_eq!(response.name, "Robert");

        let stored = fetch_user_name(&setup.container, "bob@example.com")
            .await
            .unwrap();
        assert_eq!(stored.as_deref(), Some("Robert"));
    }
}
