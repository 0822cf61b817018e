use crate::guild::Role;
use crate::user::User;
use crate::{Result, Snowflake};
use async_trait::async_trait;
use serde_json::Value;

/// The store that owns every `User` and `Role`. Members only hold IDs and resolve through here.
///
/// Writes are upserts: placing the same user twice keeps the last payload.
#[async_trait]
pub trait IdentityCache: Send + Sync {
    /// Parses a user payload and stores it under its ID.
    fn place_user_data(&self, data: &Value) -> Result<()>;

    fn get_user(&self, id: Snowflake) -> Option<User>;

    fn get_role(&self, id: Snowflake) -> Option<Role>;

    async fn get_dm_channel_id(&self, user_id: Snowflake) -> Result<Snowflake>;
}
