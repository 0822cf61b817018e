use crate::Snowflake;
use ::http::Method;
use std::fmt;

/// A REST endpoint: one verb against one path below the API base.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn new<S: Into<String>>(method: Method, path: S) -> Route {
        Route {
            method,
            path: path.into(),
        }
    }

    pub fn modify_guild_member(guild_id: Snowflake, user_id: Snowflake) -> Route {
        Route::new(
            Method::PATCH,
            format!("/guilds/{}/members/{}", guild_id, user_id),
        )
    }

    pub fn add_guild_member_role(
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> Route {
        Route::new(
            Method::PUT,
            format!("/guilds/{}/members/{}/roles/{}", guild_id, user_id, role_id),
        )
    }

    pub fn remove_guild_member_role(
        guild_id: Snowflake,
        user_id: Snowflake,
        role_id: Snowflake,
    ) -> Route {
        Route::new(
            Method::DELETE,
            format!("/guilds/{}/members/{}/roles/{}", guild_id, user_id, role_id),
        )
    }

    pub fn remove_guild_member(guild_id: Snowflake, user_id: Snowflake) -> Route {
        Route::new(
            Method::DELETE,
            format!("/guilds/{}/members/{}", guild_id, user_id),
        )
    }

    pub fn create_guild_ban(guild_id: Snowflake, user_id: Snowflake) -> Route {
        Route::new(Method::PUT, format!("/guilds/{}/bans/{}", guild_id, user_id))
    }

    pub fn create_message(channel_id: Snowflake) -> Route {
        Route::new(Method::POST, format!("/channels/{}/messages", channel_id))
    }

    pub fn delete_guild_emoji(guild_id: Snowflake, emoji_id: Snowflake) -> Route {
        Route::new(
            Method::DELETE,
            format!("/guilds/{}/emojis/{}", guild_id, emoji_id),
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
