use super::{HttpError, Route};
use crate::Snowflake;
use async_trait::async_trait;
use serde_json::{json, Value};

/// The REST transport. Implementors only provide `request`; every named endpoint maps onto it.
///
/// `reason` is sent verbatim as the `X-Audit-Log-Reason` header. Retries and rate limiting are
/// the implementor's concern.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        route: Route,
        body: Option<Value>,
        reason: Option<&str>,
    ) -> Result<Value, HttpError>;

    async fn modify_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        body: Value,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.request(Route::modify_guild_member(guild_id, user_id), Some(body), reason)
            .await
    }

    async fn add_guild_member_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        let route = Route::add_guild_member_role(guild_id, user_id, role_id);
        self.request(route, None, reason).await
    }

    async fn remove_guild_member_role(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        let route = Route::remove_guild_member_role(guild_id, user_id, role_id);
        self.request(route, None, reason).await
    }

    async fn remove_guild_member(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.request(Route::remove_guild_member(guild_id, user_id), None, reason)
            .await
    }

    async fn create_guild_ban(
        &self,
        guild_id: Snowflake,
        user_id: Snowflake,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        let body = json!({ "delete_message_days": delete_message_days });
        self.request(Route::create_guild_ban(guild_id, user_id), Some(body), reason)
            .await
    }

    async fn create_message(
        &self,
        payload: Value,
        channel_id: Snowflake,
    ) -> Result<Value, HttpError> {
        self.request(Route::create_message(channel_id), Some(payload), None)
            .await
    }

    async fn delete_guild_emoji(
        &self,
        guild_id: Snowflake,
        emoji_id: Snowflake,
        reason: Option<&str>,
    ) -> Result<Value, HttpError> {
        self.request(Route::delete_guild_emoji(guild_id, emoji_id), None, reason)
            .await
    }
}
