use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Change a user's display name, keyed by email.
///
/// Both fields are required; requiredness at deserialization is the only
/// validation this service performs on the input.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserNameCommand {
    pub email: String,
    pub name: String,
}
